use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::error::ScorecardError;
use crate::model::{Course, Round};
use crate::storage::LoadState;

pub const COURSES_DIR: &str = "courses";
pub const COURSES_FILE: &str = "courses.json";
pub const ROUNDS_DIR: &str = "rounds";
pub const ROUNDS_FILE: &str = "rounds.json";

/// Where courses and rounds are kept. Constructed by the caller and passed
/// to whatever needs it.
pub trait Store: Send + Sync {
    fn load_courses(&self) -> Result<Vec<Course>, ScorecardError>;
    fn save_courses(&self, courses: &[Course]) -> Result<(), ScorecardError>;
    fn load_rounds(&self) -> Result<Vec<Round>, ScorecardError>;
    fn save_rounds(&self, rounds: &[Round]) -> Result<(), ScorecardError>;
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn courses_path(&self) -> PathBuf {
        self.data_dir.join(COURSES_DIR).join(COURSES_FILE)
    }

    #[must_use]
    pub fn rounds_path(&self) -> PathBuf {
        self.data_dir.join(ROUNDS_DIR).join(ROUNDS_FILE)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T, ScorecardError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScorecardError::NotFound(format!(
                "{what} file {}",
                path.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&contents)
        .map_err(|e| ScorecardError::Decoding(format!("{what} file {}: {e}", path.display())))
}

// temp file + rename so a crash never leaves a half written file behind
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ScorecardError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl Store for JsonFileStore {
    fn load_courses(&self) -> Result<Vec<Course>, ScorecardError> {
        let courses: Vec<Course> = read_json(&self.courses_path(), "courses")?;
        log::info!("loaded {} courses", courses.len());
        Ok(courses)
    }

    fn save_courses(&self, courses: &[Course]) -> Result<(), ScorecardError> {
        if courses.is_empty() {
            log::debug!("no courses to save, leaving {} alone", self.courses_path().display());
            return Ok(());
        }
        write_json(&self.courses_path(), courses)?;
        log::info!("saved {} courses", courses.len());
        Ok(())
    }

    fn load_rounds(&self) -> Result<Vec<Round>, ScorecardError> {
        let rounds: Vec<Round> = read_json(&self.rounds_path(), "rounds")?;
        log::info!("loaded {} rounds", rounds.len());
        Ok(rounds)
    }

    fn save_rounds(&self, rounds: &[Round]) -> Result<(), ScorecardError> {
        write_json(&self.rounds_path(), rounds)?;
        log::info!("saved {} rounds", rounds.len());
        Ok(())
    }
}

/// Runs `load` through a [`LoadState`], leaving it `Loaded` or `Failed`.
pub fn load_into<T, F>(state: &mut LoadState<T>, load: F) -> Result<(), ScorecardError>
where
    T: Default,
    F: FnOnce() -> Result<T, ScorecardError>,
{
    state.start()?;
    let result = load();
    if let Err(e) = &result {
        log::warn!("load failed: {e}");
    }
    state.finish(result)
}

/// Loads courses on a worker thread. The receiver yields `Loading` and then
/// the finished state.
pub fn spawn_load_courses(store: Arc<dyn Store>) -> Receiver<LoadState<Vec<Course>>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut state = LoadState::Idle;
        // sends fail only once the receiver is dropped
        let _ = tx.send(LoadState::Loading);
        if load_into(&mut state, || store.load_courses()).is_ok() {
            let _ = tx.send(state);
        }
    });
    rx
}
