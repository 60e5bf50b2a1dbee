use clap::Parser;
use rusty_scorecard::args::{Cli, Command, Settings, load_settings};
use rusty_scorecard::model::HandicapIndex;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_without_config() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from(["rusty-scorecard", "courses"])?;
    let settings = load_settings(&cli)?;
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.my_handicap_index.value(), Some(13.0));
    Ok(())
}

#[test]
fn test_flags_override_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let config = dir.path().join("scorecard.toml");
    fs::write(
        &config,
        "data_dir = \"/srv/golf\"\nmy_name = \"Ron\"\nmy_handicap_index = 8.2\n",
    )?;
    let config_arg = config.to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["rusty-scorecard", "--config-toml", &config_arg, "courses"])?;
    let settings = load_settings(&cli)?;
    assert_eq!(settings.data_dir, PathBuf::from("/srv/golf"));
    assert_eq!(settings.my_name, "Ron");
    assert_eq!(settings.my_handicap_index.value(), Some(8.2));

    let cli = Cli::try_parse_from([
        "rusty-scorecard",
        "--config-toml",
        &config_arg,
        "--my-name",
        "Jon",
        "--my-handicap-index",
        "",
        "courses",
    ])?;
    let settings = load_settings(&cli)?;
    assert_eq!(settings.my_name, "Jon");
    assert_eq!(settings.my_handicap_index, HandicapIndex::UNSET);
    Ok(())
}

#[test]
fn test_bad_toml_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let config = dir.path().join("broken.toml");
    fs::write(&config, "my_handicap_index = \"scratch\"\n")?;
    let config_arg = config.to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["rusty-scorecard", "--config-toml", &config_arg, "courses"])?;
    assert!(load_settings(&cli).is_err());
    Ok(())
}

#[test]
fn test_handicap_command_accepts_plus_index() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from([
        "rusty-scorecard",
        "handicap",
        "--index",
        "-1.2",
        "--slope",
        "128",
        "--rating",
        "71.6",
        "--par",
        "72",
    ])?;
    match cli.command {
        Command::Handicap { index, slope, .. } => {
            assert_eq!(index.value(), Some(-1.2));
            assert_eq!(slope, 128);
        }
        other => panic!("unexpected command {other:?}"),
    }

    let too_many = Cli::try_parse_from([
        "rusty-scorecard",
        "new-round",
        "--course",
        "00000000-0000-0000-0000-000000000000",
        "--tee",
        "00000000-0000-0000-0000-000000000000",
        "--players",
        "5",
    ]);
    assert!(too_many.is_err());
    Ok(())
}

#[test]
fn test_demo_group_size_and_player_number() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::try_parse_from(["rusty-scorecard", "demo", "--seed", "9", "--players", "3"])?;
    match cli.command {
        Command::Demo { seed, players, holes } => {
            assert_eq!(seed, 9);
            assert_eq!(players, Some(3));
            assert_eq!(holes, 18);
        }
        other => panic!("unexpected command {other:?}"),
    }

    let cli = Cli::try_parse_from(["rusty-scorecard", "demo"])?;
    assert!(matches!(cli.command, Command::Demo { players: None, .. }));
    assert!(Cli::try_parse_from(["rusty-scorecard", "demo", "--players", "0"]).is_err());
    assert!(Cli::try_parse_from(["rusty-scorecard", "demo", "--players", "5"]).is_err());

    let round = "00000000-0000-0000-0000-000000000000";
    let score = |player: &str| {
        Cli::try_parse_from([
            "rusty-scorecard",
            "score",
            "--round",
            round,
            "--player",
            player,
            "--hole",
            "1",
            "--strokes",
            "4",
        ])
    };
    assert!(score("0").is_err());
    assert!(score("5").is_err());
    match score("2")?.command {
        Command::Score { player, .. } => assert_eq!(player, 2),
        other => panic!("unexpected command {other:?}"),
    }
    Ok(())
}

#[test]
fn test_data_dir_must_be_a_writable_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let dir_arg = dir.path().to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["rusty-scorecard", "--data-dir", &dir_arg, "courses"])?;
    assert_eq!(cli.data_dir, Some(dir.path().to_path_buf()));

    // created on first save
    let fresh = dir.path().join("golf");
    let fresh_arg = fresh.to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["rusty-scorecard", "--data-dir", &fresh_arg, "courses"])?;
    assert_eq!(cli.data_dir, Some(fresh));

    let file = dir.path().join("notes.txt");
    fs::write(&file, "not a directory")?;
    let file_arg = file.to_string_lossy().to_string();
    assert!(Cli::try_parse_from(["rusty-scorecard", "--data-dir", &file_arg, "courses"]).is_err());

    let under_file = file.join("golf");
    let under_file_arg = under_file.to_string_lossy().to_string();
    assert!(
        Cli::try_parse_from(["rusty-scorecard", "--data-dir", &under_file_arg, "courses"]).is_err()
    );
    Ok(())
}
