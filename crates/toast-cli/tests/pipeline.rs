//! End-to-end pipeline runs over a tournament folder fixture.

use std::fs;
use std::path::Path;

use toast_cli::config::load_config;
use toast_cli::pipeline::{PipelineOptions, run};

fn write_csv(dir: &Path, table: &str, content: &str) {
    fs::write(dir.join(format!("{table}.csv")), content).expect("write csv fixture");
}

fn rubric_header() -> &'static str {
    "Team Number,Identify - Define,Identify - Research (CV),Design - Plan,\
     Design - Teamwork (CV),Create - Innovation (CV),Create - Model,\
     Iterate - Sharing,Iterate - Improvement,Communicate - Impact (CV),\
     Communicate - Fun (CV)\n"
}

fn robot_design_header() -> &'static str {
    "Team Number,Identify - Strategy,Identify - Research (CV),Design - Ideas (CV),\
     Design - Building/Coding,Create - Attachments,Create - Code/ Sensors,\
     Iterate - Testing,Iterate - Improvements (CV),Communicate - Impact (CV),\
     Communicate - Fun (CV)\n"
}

fn write_tournament(root: &Path) {
    let data = root.join("data");
    fs::create_dir_all(&data).expect("create data dir");

    write_csv(
        &data,
        "TournamentData",
        "Team Number,Team Name,Max Robot Game Score,Robot Game Rank,Award,Advance?\n\
         101,Eagles,450,1,Champions 1st Place,Yes\n\
         202,Falcons,430,2,Robot Design 1st Place,Yes\n\
         303,Hawks,410,3,,Alt\n",
    );
    write_csv(
        &data,
        "RobotGameScores",
        "Team Number,Robot Game 1 Score,Robot Game 2 Score,Robot Game 3 Score\n\
         101,430,450,445\n\
         202,400,430,425\n\
         303,410,380,395\n",
    );
    write_csv(
        &data,
        "InnovationProjectResults",
        &format!(
            "{}101,3,4,3,4,5,4,3,4,4,3\n202,3,3,3,3,4,4,3,3,3,3\n303,2,3,2,3,3,3,2,3,3,2\n",
            rubric_header()
        ),
    );
    write_csv(
        &data,
        "RobotDesignResults",
        &format!(
            "{}101,4,4,3,4,4,4,3,4,4,3\n202,4,3,4,4,3,4,4,3,3,4\n303,3,3,2,3,3,3,2,3,3,2\n",
            robot_design_header()
        ),
    );
    write_csv(
        &data,
        "CoreValuesResults",
        "Team Number,Gracious Professionalism 1,Gracious Professionalism 2,\
         Gracious Professionalism 3\n\
         101,3,4,3\n\
         202,3,3,2\n\
         303,2,3,2\n",
    );

    fs::write(
        root.join("template.html"),
        "<h1>{{ tournament_name }}</h1>\n\
         {{ team_list }}\n\
         <h2>Advancing</h2>\n{{ adv_list }}\n\
         <h2>Robot Game</h2>\n{{ rg_list }}\n\
         <h2>Champions</h2>\n{{ champ_list }}\n\
         Congratulations to {{ champ_list_this_these }}.\n",
    )
    .expect("write template");

    fs::write(
        root.join("tournament.json"),
        r#"{
  "tournament_name": "Spring Qualifier",
  "dual_presenter": false,
  "template_file": "template.html",
  "output_file": "ceremony.html",
  "critical_variables": ["tournament_name", "rg_list"],
  "divisions": [{ "data_dir": "data", "advancing_allowed": 2 }],
  "awards": [
    {
      "id": "robot-game",
      "name": "Robot Game",
      "kind": "rank-based",
      "scope": "division",
      "division_counts": { "D1": 2 },
      "script_tags": { "d1": "rg_list" }
    },
    {
      "id": "champions",
      "name": "Champions",
      "kind": "judged",
      "scope": "division",
      "labels": ["Champions 1st Place"],
      "division_counts": { "D1": 1 },
      "script_tags": { "d1": "champ_list" }
    }
  ]
}
"#,
    )
    .expect("write config");
}

#[test]
fn end_to_end_writes_script_and_report() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_tournament(dir.path());
    let config = load_config(&dir.path().join("tournament.json")).expect("load config");

    let result = run(dir.path(), &config, &PipelineOptions::default()).expect("run pipeline");

    assert!(!result.report.has_errors());
    assert_eq!(result.report.warning_count(), 0);
    assert_eq!(result.divisions.len(), 1);
    assert_eq!(result.divisions[0].teams, 3);
    assert_eq!(result.divisions[0].advancing, 2);
    assert_eq!(result.divisions[0].alternates, 1);
    assert_eq!(result.divisions[0].winners, 3);

    let output = result.output_path.expect("script written");
    let script = fs::read_to_string(&output).expect("read script");
    assert!(script.contains("<h1>Spring Qualifier</h1>"));
    assert!(script.contains("<p>Team 101, Eagles</p>"));
    assert!(script.contains(
        "The 2nd place Robot Game award with a score of 430 points \
         goes to team number 202, Falcons"
    ));
    assert!(script.contains(
        "The 1st place Robot Game award with a score of 450 points \
         goes to team number 101, Eagles"
    ));
    assert!(script.contains("The 1st place Champions award goes to team number 101, Eagles"));
    assert!(script.contains("Congratulations to this team."));
    // Suspense ordering: runner-up announced before the winner.
    let second = script.find("2nd place Robot Game").expect("2nd place line");
    let first = script.find("1st place Robot Game").expect("1st place line");
    assert!(second < first);

    let report_path = result.report_path.expect("report written");
    let report_text = fs::read_to_string(report_path).expect("read report json");
    assert!(report_text.contains("\"schema\": \"toast.ceremony-report\""));
    assert!(report_text.contains("\"tournament\": \"Spring Qualifier\""));
}

#[test]
fn rerun_produces_identical_script() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_tournament(dir.path());
    let config = load_config(&dir.path().join("tournament.json")).expect("load config");

    let first = run(dir.path(), &config, &PipelineOptions::default()).expect("first run");
    let script_one =
        fs::read(first.output_path.as_deref().expect("first script")).expect("read first");
    let second = run(dir.path(), &config, &PipelineOptions::default()).expect("second run");
    let script_two =
        fs::read(second.output_path.as_deref().expect("second script")).expect("read second");
    assert_eq!(script_one, script_two);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_tournament(dir.path());
    let config = load_config(&dir.path().join("tournament.json")).expect("load config");

    let options = PipelineOptions {
        dry_run: true,
        ..PipelineOptions::default()
    };
    let result = run(dir.path(), &config, &options).expect("dry run");

    assert!(!result.report.has_errors());
    assert!(result.output_path.is_none());
    assert!(result.report_path.is_none());
    assert!(!dir.path().join("ceremony.html").exists());
    assert!(!dir.path().join("ceremony_report.json").exists());
}

#[test]
fn validation_errors_block_collection_and_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_tournament(dir.path());
    // 1 is outside the Gracious Professionalism value set.
    write_csv(
        &dir.path().join("data"),
        "CoreValuesResults",
        "Team Number,Gracious Professionalism 1,Gracious Professionalism 2,\
         Gracious Professionalism 3\n\
         101,1,4,3\n\
         202,3,3,2\n\
         303,2,3,2\n",
    );
    let config = load_config(&dir.path().join("tournament.json")).expect("load config");

    let result = run(dir.path(), &config, &PipelineOptions::default()).expect("run pipeline");

    assert!(result.report.has_errors());
    assert!(result.divisions.is_empty());
    assert!(result.output_path.is_none());
    assert!(!dir.path().join("ceremony.html").exists());
    // The issue report still comes out so the failure is machine readable.
    let report_path = result.report_path.expect("report written");
    let report_text = fs::read_to_string(report_path).expect("read report json");
    assert!(report_text.contains("Gracious Professionalism 1"));
}

#[test]
fn over_selected_advancing_blocks_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_tournament(dir.path());
    // Three advancing teams against an allotment of two.
    write_csv(
        &dir.path().join("data"),
        "TournamentData",
        "Team Number,Team Name,Max Robot Game Score,Robot Game Rank,Award,Advance?\n\
         101,Eagles,450,1,Champions 1st Place,Yes\n\
         202,Falcons,430,2,,Yes\n\
         303,Hawks,410,3,,Yes\n",
    );
    let config = load_config(&dir.path().join("tournament.json")).expect("load config");

    let result = run(dir.path(), &config, &PipelineOptions::default()).expect("run pipeline");

    assert!(result.report.has_errors());
    assert!(
        result
            .report
            .errors()
            .any(|issue| issue.message == "3 advancing team(s) selected but only 2 permitted")
    );
    assert!(result.output_path.is_none());
    assert!(!dir.path().join("ceremony.html").exists());
    assert!(result.report_path.is_some());
}

#[test]
fn missing_critical_variable_blocks_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_tournament(dir.path());
    fs::write(
        dir.path().join("template.html"),
        "{{ tournament_name }} {{ head_referee_name }}",
    )
    .expect("rewrite template");
    let mut config = load_config(&dir.path().join("tournament.json")).expect("load config");
    config.critical_variables.push("head_referee_name".to_string());

    let result = run(dir.path(), &config, &PipelineOptions::default()).expect("run pipeline");

    assert!(result.report.has_errors());
    assert!(
        result
            .report
            .errors()
            .any(|issue| issue.message == "missing critical variable: head_referee_name")
    );
    assert!(result.output_path.is_none());
    assert!(result.report_path.is_some());
}

#[test]
fn missing_optional_variable_warns_but_writes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_tournament(dir.path());
    fs::write(
        dir.path().join("template.html"),
        "{{ tournament_name }} {{ closing_remarks }}",
    )
    .expect("rewrite template");
    let config = load_config(&dir.path().join("tournament.json")).expect("load config");

    let result = run(dir.path(), &config, &PipelineOptions::default()).expect("run pipeline");

    assert!(!result.report.has_errors());
    assert!(
        result
            .report
            .warnings()
            .any(|issue| issue.message == "missing variable (empty substitution): closing_remarks")
    );
    let script = fs::read_to_string(result.output_path.expect("script written"))
        .expect("read script");
    assert_eq!(script, "Spring Qualifier ");
}
