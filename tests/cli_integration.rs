use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const CHICAGO: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,Gender,Birth Year,User Type
2017-01-02 08:15:00,2017-01-02 08:25:00,600,Canal St,Clark St,Male,1980.0,Subscriber
2017-01-09 08:45:00,2017-01-09 09:05:00,1200,Canal St,State St,Female,1990.0,Subscriber
2017-01-03 17:00:00,2017-01-03 17:30:00,1800,Clark St,Canal St,,,Customer
2017-02-06 12:00:00,2017-02-06 12:20:00,1200,State St,Canal St,Male,1985.0,Subscriber
";

const WASHINGTON: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-03-06 07:00:00,2017-03-06 07:10:00,600,14th St,K St,Subscriber
2017-03-07 18:00:00,2017-03-07 18:30:00,1800,K St,14th St,Customer
";

struct Fixture {
    _root: tempfile::TempDir,
    data: PathBuf,
    home: PathBuf,
}

fn fixture() -> Fixture {
    let root = tempfile::tempdir().expect("create temp dir");
    let data = root.path().join("data");
    let home = root.path().join("home");
    fs::create_dir_all(&data).expect("create data dir");
    fs::create_dir_all(&home).expect("create home dir");
    fs::write(data.join("chicago.csv"), CHICAGO).expect("write chicago");
    fs::write(data.join("washington.csv"), WASHINGTON).expect("write washington");
    Fixture {
        data,
        home,
        _root: root,
    }
}

fn run_bikestats(fx: &Fixture, args: &[&str], stdin: Option<&str>) -> (bool, String, String) {
    let bin = std::env::var("CARGO_BIN_EXE_bikestats").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("bikestats.exe");
        } else {
            path.push("bikestats");
        }
        path.to_string_lossy().into_owned()
    });
    let mut cmd = Command::new(bin);
    cmd.arg("--data-dir")
        .arg(&fx.data)
        .args(args)
        .env("HOME", &fx.home)
        .env("XDG_CONFIG_HOME", fx.home.join(".config"))
        .env_remove("BIKESTATS_DATA_DIR")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("run bikestats");
    {
        let mut pipe = child.stdin.take().expect("stdin");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("write stdin");
        }
    }
    let output = child.wait_with_output().expect("wait bikestats");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

fn metric<'a>(json: &'a Value, section: &str, key: &str) -> &'a Value {
    let section = json["sections"]
        .as_array()
        .expect("sections")
        .iter()
        .find(|s| s["name"] == section)
        .unwrap_or_else(|| panic!("missing section {section}"));
    &section["metrics"]
        .as_array()
        .expect("metrics")
        .iter()
        .find(|m| m["key"] == key)
        .unwrap_or_else(|| panic!("missing metric {key}"))["value"]
}

fn json_report(fx: &Fixture, args: &[&str]) -> Value {
    let mut full = vec!["-j"];
    full.extend_from_slice(args);
    let (ok, stdout, stderr) = run_bikestats(fx, &full, None);
    assert!(ok, "stderr: {stderr}");
    serde_json::from_str(&stdout).expect("json")
}

#[test]
fn monday_filter_reports_january_mornings() {
    let fx = fixture();
    let json = json_report(&fx, &["--city", "chicago", "-m", "january", "-d", "monday"]);

    assert_eq!(json["city"], "chicago");
    assert_eq!(json["trip_count"], 2);
    assert_eq!(metric(&json, "time", "most_common_day")["value"], "Monday");
    assert_eq!(metric(&json, "time", "most_common_hour")["value"], "8 AM");
    assert_eq!(
        metric(&json, "stations", "most_common_start_station")["value"],
        "Canal St"
    );
    assert_eq!(
        metric(&json, "duration", "total_travel_time")["value"],
        "0:30:00"
    );
    assert_eq!(
        metric(&json, "demographics", "earliest_birth_year")["value"],
        1980
    );
}

#[test]
fn city_without_demographic_columns_marks_them_not_available() {
    let fx = fixture();
    let json = json_report(&fx, &["--city", "washington", "-m", "all", "-d", "all"]);

    assert_eq!(json["trip_count"], 2);
    assert_eq!(metric(&json, "demographics", "gender")["type"], "not_available");
    assert_eq!(
        metric(&json, "demographics", "most_common_birth_year")["type"],
        "not_available"
    );
    assert_eq!(
        metric(&json, "demographics", "user_type:Customer")["value"],
        1
    );
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let fx = fixture();
    let args = ["--city", "new york", "-m", "all", "-d", "all"];
    fs::write(fx.data.join("new_york_city.csv"), CHICAGO).expect("write nyc");

    let mut first = json_report(&fx, &args);
    let mut second = json_report(&fx, &args);
    for json in [&mut first, &mut second] {
        json.as_object_mut().expect("object").remove("elapsed_ms");
    }
    assert_eq!(first, second);
    assert_eq!(first["city"], "new_york");
}

#[test]
fn no_matching_trips_is_reported() {
    let fx = fixture();
    let (ok, stdout, _) = run_bikestats(&fx, &["--city", "chicago", "-m", "june", "-d", "all"], None);
    assert!(ok);
    assert!(stdout.contains("No trips match the given filters"));
}

#[test]
fn invalid_city_is_rejected() {
    let fx = fixture();
    let (ok, _, stderr) = run_bikestats(&fx, &["--city", "boston", "-m", "all", "-d", "all"], None);
    assert!(!ok);
    assert!(stderr.contains("Invalid city"), "stderr: {stderr}");
}

#[test]
fn missing_city_file_is_an_error() {
    let fx = fixture();
    let (ok, _, stderr) = run_bikestats(&fx, &["--city", "nyc", "-m", "all", "-d", "all"], None);
    assert!(!ok);
    assert!(stderr.contains("Failed to open"), "stderr: {stderr}");
}

#[test]
fn table_output_has_sections_and_summary() {
    let fx = fixture();
    let (ok, stdout, stderr) = run_bikestats(
        &fx,
        &["--city", "chicago", "-m", "all", "-d", "all", "--no-color"],
        None,
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Bikeshare data for Chicago, Month: all, Day: all"));
    assert!(stdout.contains("User Stats"));
    assert!(stdout.contains("4 trips analyzed"));
}

#[test]
fn interactive_mode_prompts_until_valid_then_stops() {
    let fx = fixture();
    let (ok, stdout, stderr) = run_bikestats(
        &fx,
        &["-j"],
        Some("boston\nchicago\nfebruary\nfunday\nall\nno\n"),
    );
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Invalid city input."));
    assert!(stdout.contains("Invalid day input."));
    assert!(stdout.contains("\"trip_count\": 1"));
    assert!(stdout.contains("Would you like to restart? Enter yes or no."));
}

#[test]
fn config_file_overrides_city_file_names() {
    let fx = fixture();
    let config_dir = fx.home.join(".config").join("bikestats");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(fx.data.join("dc.csv"), WASHINGTON).expect("write dc");
    fs::write(config_dir.join("config.toml"), "[files]\nwashington = \"dc.csv\"\n")
        .expect("write config");
    fs::remove_file(fx.data.join("washington.csv")).expect("remove default");

    let json = json_report(&fx, &["--city", "dc", "-m", "march", "-d", "all"]);
    assert_eq!(json["trip_count"], 2);
}
