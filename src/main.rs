use anyhow::{Context, Result, anyhow};
use chrono::Local;
use rusty_scorecard::args::{self, Command, Settings};
use rusty_scorecard::error::ScorecardError;
use rusty_scorecard::model::{CourseCatalog, Round, RoundBook, Tee};
use rusty_scorecard::score::{StrokeGenerator, course_handicap};
use rusty_scorecard::storage::{JsonFileStore, Store};
use rusty_scorecard::view::scorecard::render_text;
use uuid::Uuid;

const DEMO_NAMES: [&str; 4] = ["William", "Jon", "Ronald", "Freddy"];
const DEMO_PARS: [i32; 18] = [4, 5, 3, 4, 4, 4, 3, 5, 4, 4, 4, 3, 5, 4, 4, 3, 4, 5];

fn main() -> Result<()> {
    let cli = args::args_checks();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "info" }),
    )
    .init();

    let settings = args::load_settings(&cli).context("load settings")?;
    let store = JsonFileStore::new(&settings.data_dir);

    match cli.command {
        Command::Scorecard { round } => print_scorecard(&store, round),
        Command::Handicap {
            index,
            slope,
            rating,
            par,
        } => {
            match course_handicap(index, slope, rating, par) {
                Some(ch) => println!("Course handicap: {ch}"),
                None => println!("Handicap index not set"),
            }
            Ok(())
        }
        Command::Courses => list_courses(&store),
        Command::NewRound {
            course,
            tee,
            players,
        } => new_round(&store, &settings, course, tee, players),
        Command::Score {
            round,
            player,
            hole,
            strokes,
        } => record_strokes(&store, round, player, hole, strokes),
        Command::Demo {
            seed,
            players,
            holes,
        } => {
            print_demo(seed, players, holes);
            Ok(())
        }
    }
}

fn load_catalog(store: &impl Store) -> Result<CourseCatalog> {
    let courses = store.load_courses().context("load courses")?;
    Ok(CourseCatalog::new(courses))
}

// no rounds file yet is an empty book
fn load_book(store: &impl Store) -> Result<RoundBook> {
    match store.load_rounds() {
        Ok(rounds) => Ok(RoundBook::new(rounds)),
        Err(ScorecardError::NotFound(_)) => Ok(RoundBook::default()),
        Err(e) => Err(anyhow::Error::new(e).context("load rounds")),
    }
}

fn print_scorecard(store: &impl Store, round_id: Uuid) -> Result<()> {
    let book = load_book(store)?;
    let round = book
        .round(round_id)
        .ok_or_else(|| anyhow!("no round {round_id}"))?;
    let catalog = load_catalog(store)?;
    let (course, tee) = catalog.course_and_tee(round.course_id, round.tee_id)?;

    println!(
        "{} ({} tee) {} [{}]",
        course.name, tee.color, round.date, round.status
    );
    print!("{}", render_text(tee, &round.players));
    Ok(())
}

fn list_courses(store: &impl Store) -> Result<()> {
    let catalog = load_catalog(store)?;
    for course in &catalog.courses {
        println!("{} {} ({} holes)", course.id, course.name, course.holes);
        for tee in &course.tees {
            println!(
                "  {} {:<8} rating {:.1} slope {} par {}",
                tee.id,
                tee.color,
                tee.rating,
                tee.slope,
                tee.par_total(0..tee.hole_count())
            );
        }
    }
    Ok(())
}

fn new_round(
    store: &impl Store,
    settings: &Settings,
    course_id: Uuid,
    tee_id: Uuid,
    players: usize,
) -> Result<()> {
    let catalog = load_catalog(store)?;
    let (course, tee) = catalog.course_and_tee(course_id, tee_id)?;
    if let Err(e) = tee.rating_model().validate() {
        log::warn!("tee {} on {}: {e}", tee.id, course.name);
    }

    let mut round = Round::new(course, tee, settings, Local::now().date_naive());
    round.adjust_players(players);
    if !round.players_ready() {
        log::info!("round {} has players without a name or handicap index", round.id);
    }

    let mut book = load_book(store)?;
    let id = round.id;
    book.add_round(round)?;
    store.save_rounds(&book.rounds).context("save rounds")?;
    println!("{id}");
    Ok(())
}

fn record_strokes(
    store: &impl Store,
    round_id: Uuid,
    player: usize,
    hole: usize,
    strokes: i32,
) -> Result<()> {
    let mut book = load_book(store)?;
    let mut round = book
        .round(round_id)
        .cloned()
        .ok_or_else(|| anyhow!("no round {round_id}"))?;
    let player_idx = player
        .checked_sub(1)
        .ok_or_else(|| anyhow!("player numbers start at 1"))?;
    round.set_strokes(player_idx, hole, strokes)?;
    let status = round.update_status();
    book.update_round(round)?;
    store.save_rounds(&book.rounds).context("save rounds")?;
    println!("hole {hole}: {strokes} ({status})");
    Ok(())
}

fn print_demo(seed: u64, players: Option<usize>, holes: usize) {
    let mut tee = Tee::new(holes);
    tee.color = "White".to_string();
    tee.rating = 71.0;
    tee.slope = 113;
    for (teebox, par) in tee.teeboxes.iter_mut().zip(DEMO_PARS.iter().cycle()) {
        teebox.par = *par;
    }

    let mut generator = StrokeGenerator::seeded(seed);
    let players = match players {
        Some(count) => generator.random_group(&tee, &DEMO_NAMES, count),
        None => generator.random_players(&tee, &DEMO_NAMES),
    };
    print!("{}", render_text(&tee, &players));
}
