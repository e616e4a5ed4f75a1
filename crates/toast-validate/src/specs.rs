use toast_model::CellValue;

use toast_ingest::tables;

/// Constraint on one scored column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRule {
    /// Numeric value within an inclusive range.
    NumericRange { min: f64, max: f64 },
    /// Integer value drawn from a fixed set.
    AllowedValues(&'static [i64]),
}

impl ValueRule {
    pub fn allows(&self, cell: &CellValue) -> bool {
        match self {
            ValueRule::NumericRange { min, max } => cell
                .as_number()
                .is_some_and(|value| value >= *min && value <= *max),
            ValueRule::AllowedValues(values) => {
                cell.as_int().is_some_and(|value| values.contains(&value))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ValueRule::NumericRange { min, max } => format!("valid range ({min}-{max})"),
            ValueRule::AllowedValues(values) => format!("allowed values {values:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub rule: ValueRule,
}

/// One required scoring input table and the constraints on its columns.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub table: &'static str,
    pub columns: &'static [ColumnSpec],
}

const ROBOT_GAME_RANGE: ValueRule = ValueRule::NumericRange {
    min: 0.0,
    max: 545.0,
};
const RUBRIC_VALUES: ValueRule = ValueRule::AllowedValues(&[0, 1, 2, 3, 4, 5]);
const CORE_VALUES_SET: ValueRule = ValueRule::AllowedValues(&[0, 2, 3, 4]);

const ROBOT_GAME_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "Robot Game 1 Score",
        rule: ROBOT_GAME_RANGE,
    },
    ColumnSpec {
        name: "Robot Game 2 Score",
        rule: ROBOT_GAME_RANGE,
    },
    ColumnSpec {
        name: "Robot Game 3 Score",
        rule: ROBOT_GAME_RANGE,
    },
];

const INNOVATION_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "Identify - Define",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Identify - Research (CV)",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Design - Plan",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Design - Teamwork (CV)",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Create - Innovation (CV)",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Create - Model",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Iterate - Sharing",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Iterate - Improvement",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Communicate - Impact (CV)",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Communicate - Fun (CV)",
        rule: RUBRIC_VALUES,
    },
];

const ROBOT_DESIGN_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "Identify - Strategy",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Identify - Research (CV)",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Design - Ideas (CV)",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Design - Building/Coding",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Create - Attachments",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Create - Code/ Sensors",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Iterate - Testing",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Iterate - Improvements (CV)",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Communicate - Impact (CV)",
        rule: RUBRIC_VALUES,
    },
    ColumnSpec {
        name: "Communicate - Fun (CV)",
        rule: RUBRIC_VALUES,
    },
];

const CORE_VALUES_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        name: "Gracious Professionalism 1",
        rule: CORE_VALUES_SET,
    },
    ColumnSpec {
        name: "Gracious Professionalism 2",
        rule: CORE_VALUES_SET,
    },
    ColumnSpec {
        name: "Gracious Professionalism 3",
        rule: CORE_VALUES_SET,
    },
];

const SCORING_TABLES: &[TableSpec] = &[
    TableSpec {
        table: tables::ROBOT_GAME,
        columns: ROBOT_GAME_COLUMNS,
    },
    TableSpec {
        table: tables::INNOVATION,
        columns: INNOVATION_COLUMNS,
    },
    TableSpec {
        table: tables::ROBOT_DESIGN,
        columns: ROBOT_DESIGN_COLUMNS,
    },
    TableSpec {
        table: tables::CORE_VALUES,
        columns: CORE_VALUES_COLUMNS,
    },
];

/// The four scoring input tables a ceremony run requires, with their
/// per-column value constraints.
pub fn scoring_table_specs() -> &'static [TableSpec] {
    SCORING_TABLES
}
