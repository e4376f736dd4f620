use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::opt::*;

const APP_NAME: &str = "dota-draft";
const APP_AUTHOR: &str = "akio";
const APP_QUALIFIER: &str = "com";

pub const HERO_DATA_FILE_NAME: &str = "hero_data.json";

pub const HERO_DATA_ENV: &str = "DRAFT_HERO_DATA";
pub const TOP_COUNT_ENV: &str = "DRAFT_TOP_COUNT";
pub const BOTTOM_COUNT_ENV: &str = "DRAFT_BOTTOM_COUNT";

const DEFAULT_TOP_COUNT: usize = 15;
const DEFAULT_BOTTOM_COUNT: usize = 5;

/// Startup settings: where the hero data lives and how much of the ranking to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub hero_data_path: PathBuf,
    pub top_count: usize,
    pub bottom_count: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            hero_data_path: PathBuf::from(HERO_DATA_FILE_NAME),
            top_count: DEFAULT_TOP_COUNT,
            bottom_count: DEFAULT_BOTTOM_COUNT,
        }
    }
}

pub fn create_context(args: &[String]) -> Context {
    let runtime_dir = ProjectDirs::from(APP_QUALIFIER, APP_AUTHOR, APP_NAME)
        .map(|dirs| dirs.data_local_dir().to_path_buf());
    if let Some(dir) = &runtime_dir {
        log_if(&format!("Runtime directory: {:?}", dir), DbgFlg::Engine);
    }

    let hero_data_path = resolve_hero_data_path(
        args.get(1).map(String::as_str),
        env::var(HERO_DATA_ENV).ok().as_deref(),
        Path::new(HERO_DATA_FILE_NAME),
        runtime_dir.as_deref(),
    );

    let defaults = Context::default();
    Context {
        hero_data_path,
        top_count: count_from_env(TOP_COUNT_ENV, defaults.top_count),
        bottom_count: count_from_env(BOTTOM_COUNT_ENV, defaults.bottom_count),
    }
}

/// Picks the hero data file: explicit argument, then environment, then `local`
/// (the working directory copy), then the per-user data directory. Falls back
/// to `local` so a missing file is reported where the user expects it.
pub fn resolve_hero_data_path(
    arg: Option<&str>,
    env_value: Option<&str>,
    local: &Path,
    runtime_dir: Option<&Path>,
) -> PathBuf {
    if let Some(path) = arg.or(env_value).filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }

    if local.exists() {
        return local.to_path_buf();
    }

    runtime_dir
        .map(|dir| dir.join(HERO_DATA_FILE_NAME))
        .filter(|path| path.exists())
        .unwrap_or_else(|| local.to_path_buf())
}

fn count_from_env(key: &str, default: usize) -> usize {
    match env::var(key) {
        Ok(value) => parse_count(key, &value, default),
        Err(_) => default,
    }
}

fn parse_count(key: &str, value: &str, default: usize) -> usize {
    value.trim().parse::<usize>().unwrap_or_else(|_| {
        log_if(
            &format!("warning: {key}={value:?} is not a count, using {default}"),
            DbgFlg::Data,
        );
        default
    })
}
