use std::collections::HashMap;
use std::env;
use std::fmt::Debug;

use lazy_static::lazy_static;

#[derive(strum_macros::Display, Eq, PartialEq, Debug, Hash, Clone, Copy)]
pub enum DbgFlg {
    #[strum(serialize = "DBG_FLG_DATA")]
    Data,
    #[strum(serialize = "DBG_FLG_ENGINE")]
    Engine,
    #[strum(serialize = "DBG_FLG_CLI")]
    Cli,
}

lazy_static! {
    pub static ref DBG_FLG_DEFAULTS: HashMap<DbgFlg, bool> = HashMap::from([
        (DbgFlg::Data, true),
        (DbgFlg::Engine, false),
        (DbgFlg::Cli, false),
    ]);
}

pub trait DebugIf: Debug {
    fn dbg_if(&self, flg: DbgFlg);
}

impl<T: Debug> DebugIf for T {
    fn dbg_if(&self, flg: DbgFlg) {
        if checkflag(flg) {
            dbg!(self);
        }
    }
}

pub fn log_if(s: &str, flg: DbgFlg) {
    if checkflag(flg) {
        eprintln!("{} [{}] {}", utc_now(), flg, s);
    }
}

fn utc_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

fn checkflag(flg: DbgFlg) -> bool {
    env::var(flg.to_string()).ok().map_or_else(
        || DBG_FLG_DEFAULTS.get(&flg).copied().unwrap_or(false),
        |s| parse_flag(&s),
    )
}

fn parse_flag(s: &str) -> bool {
    s == "1" || s.eq_ignore_ascii_case("true")
}
