use std::error::Error;
use std::io::{BufRead, Write};
use std::str::FromStr;

use itertools::Itertools;
use strum_macros::EnumString;

use crate::app::scoring::{self, HeroScore};
use crate::app::{DraftEngine, DraftStatus};
use crate::context::Context;
use crate::error::DraftError;
use crate::opt::*;

const HELP_TEXT: &str = "\
Help:
    h, help                  Show this help
    q, quit                  Quit
    r, reset                 Clear all bans and picks
    s, status                Show bans, picks and hero rankings
    b <hero>, ban <hero>     Ban a hero
    a <hero>, ally <hero>    Add an ally pick
    e <hero>, enemy <hero>   Add an enemy pick
    i <hero>, info <hero>    Show a hero's matchups";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Command {
    #[strum(serialize = "help", serialize = "h")]
    Help,
    #[strum(serialize = "quit", serialize = "q")]
    Quit,
    #[strum(serialize = "reset", serialize = "r")]
    Reset,
    #[strum(serialize = "status", serialize = "s")]
    Status,
    #[strum(serialize = "ban", serialize = "b")]
    Ban,
    #[strum(serialize = "ally", serialize = "a")]
    Ally,
    #[strum(serialize = "enemy", serialize = "e")]
    Enemy,
    #[strum(serialize = "info", serialize = "i")]
    Info,
}

impl Command {
    fn takes_hero(self) -> bool {
        matches!(
            self,
            Command::Ban | Command::Ally | Command::Enemy | Command::Info
        )
    }
}

/// Runs the prompt loop until `quit` or end of input.
pub fn main<R: BufRead, W: Write>(
    engine: &mut DraftEngine,
    context: &Context,
    mut input: R,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    loop {
        let Some(line) = readline(&mut input, out)? else {
            writeln!(out)?;
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if respond(engine, context, line, out)? {
            break;
        }
        out.flush()?;
    }

    out.flush()?;
    Ok(())
}

/// Handles one input line. Returns `true` when the session should end.
pub fn respond<W: Write>(
    engine: &mut DraftEngine,
    context: &Context,
    line: &str,
    out: &mut W,
) -> Result<bool, Box<dyn Error>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(false);
    }
    let (cmd_word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let hero = hero_argument(rest);

    let Ok(command) = Command::from_str(cmd_word) else {
        writeln!(out, "Invalid command")?;
        writeln!(out, "{HELP_TEXT}")?;
        return Ok(false);
    };
    command.dbg_if(DbgFlg::Cli);

    if command.takes_hero() && hero.is_empty() {
        writeln!(out, "Hero argument required")?;
        writeln!(out, "{HELP_TEXT}")?;
        return Ok(false);
    }

    match command {
        Command::Help => writeln!(out, "{HELP_TEXT}")?,
        Command::Quit => {
            writeln!(out, "Quitting")?;
            return Ok(true);
        }
        Command::Reset => {
            engine.reset();
            writeln!(out, "Reset draft engine")?;
        }
        Command::Status => {
            let status = engine.status();
            write_status(out, &status, context)?;
        }
        Command::Ban => report_pick(out, engine.ban(&hero), "Banned")?,
        Command::Ally => report_pick(out, engine.ally(&hero), "Ally pick")?,
        Command::Enemy => report_pick(out, engine.enemy(&hero), "Enemy pick")?,
        Command::Info => match engine.info(&hero) {
            Ok(record) => writeln!(out, "{record}")?,
            Err(err) => writeln!(out, "error: {err}")?,
        },
    }
    engine.state().dbg_if(DbgFlg::Engine);

    Ok(false)
}

/// Free text after the command word, with whitespace collapsed. A leading quote
/// is parsed shell-style; anything else is taken as typed, so names such as
/// `Nature's Prophet` keep their apostrophe.
fn hero_argument(rest: &str) -> String {
    let rest = rest.trim();
    let words = rest
        .starts_with(&['"', '\''][..])
        .then(|| shlex::split(rest))
        .flatten()
        .unwrap_or_else(|| vec![rest.to_string()]);

    words.iter().flat_map(|word| word.split_whitespace()).join(" ")
}

fn report_pick<W: Write>(
    out: &mut W,
    result: Result<String, DraftError>,
    label: &str,
) -> Result<(), Box<dyn Error>> {
    match result {
        Ok(name) => writeln!(out, "{label}: {name}")?,
        Err(err) => writeln!(out, "error: {err}")?,
    }
    Ok(())
}

fn write_status<W: Write>(
    out: &mut W,
    status: &DraftStatus,
    context: &Context,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "Bans   : {}", list_or_none(&status.banned))?;
    writeln!(out, "Allies : {}", list_or_none(&status.ally_picks))?;
    writeln!(out, "Enemies: {}", list_or_none(&status.enemy_picks))?;

    let (best, worst) =
        scoring::top_and_bottom(&status.ranked, context.top_count, context.bottom_count);
    if !best.is_empty() {
        writeln!(out, "Best picks:")?;
        write_scores(out, best)?;
    }
    if !worst.is_empty() {
        writeln!(out, "Worst picks:")?;
        write_scores(out, worst)?;
    }
    Ok(())
}

fn write_scores<W: Write>(out: &mut W, scores: &[HeroScore]) -> Result<(), Box<dyn Error>> {
    for hero in scores {
        writeln!(out, "  {:>+4}  {}", hero.score, hero.name)?;
    }
    Ok(())
}

fn list_or_none(heroes: &[String]) -> String {
    if heroes.is_empty() {
        "-".to_string()
    } else {
        heroes.iter().join(", ")
    }
}

fn readline<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>, Box<dyn Error>> {
    write!(out, "> ")?;
    out.flush()?;
    let mut buffer = Vec::new();
    if input.read_until(b'\n', &mut buffer)? == 0 {
        return Ok(None);
    }
    // Bytes that are not UTF-8 end up in an unknown hero name, not a dead session.
    Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::app::HeroDataset;
    use crate::models::draft_state::DraftState;
    use crate::models::hero::HeroRecord;

    fn engine() -> DraftEngine {
        let set = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>();
        let hero = |name: &str, aliases: &[&str], bad: &[&str], synergy: &[&str]| HeroRecord {
            name: name.to_string(),
            aliases: set(aliases),
            good_against: BTreeSet::new(),
            bad_against: set(bad),
            works_well_with: set(synergy),
        };
        let dataset = HeroDataset::from_records(vec![
            hero("Anti-Mage", &["am"], &["Medusa"], &["Dark Seer"]),
            hero("Medusa", &["dusa"], &[], &[]),
            hero("Dark Seer", &["ds", "ish'kafel"], &[], &[]),
            hero("Lion", &[], &[], &[]),
            hero("Nature's Prophet", &["np", "furion"], &[], &[]),
        ])
        .unwrap();
        DraftEngine::new(dataset)
    }

    fn run_session(engine: &mut DraftEngine, input: &str) -> String {
        run_session_bytes(engine, input.as_bytes())
    }

    fn run_session_bytes(engine: &mut DraftEngine, input: &[u8]) -> String {
        let mut out = Vec::new();
        main(engine, &Context::default(), input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn respond_text(engine: &mut DraftEngine, line: &str) -> (bool, String) {
        let mut out = Vec::new();
        let quit = respond(engine, &Context::default(), line, &mut out).unwrap();
        (quit, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_command_aliases() {
        assert_eq!(Command::from_str("h").unwrap(), Command::Help);
        assert_eq!(Command::from_str("HELP").unwrap(), Command::Help);
        assert_eq!(Command::from_str("Q").unwrap(), Command::Quit);
        assert_eq!(Command::from_str("r").unwrap(), Command::Reset);
        assert_eq!(Command::from_str("Status").unwrap(), Command::Status);
        assert_eq!(Command::from_str("b").unwrap(), Command::Ban);
        assert_eq!(Command::from_str("ALLY").unwrap(), Command::Ally);
        assert_eq!(Command::from_str("e").unwrap(), Command::Enemy);
        assert_eq!(Command::from_str("i").unwrap(), Command::Info);
        assert!(Command::from_str("pick").is_err());
    }

    #[test]
    fn test_quit_ends_session() {
        let mut engine = engine();
        let (quit, text) = respond_text(&mut engine, "q");
        assert!(quit);
        assert_eq!(text, "Quitting\n");
    }

    #[test]
    fn test_picks_and_status() {
        let mut engine = engine();
        let (_, text) = respond_text(&mut engine, "e dusa");
        assert_eq!(text, "Enemy pick: Medusa\n");
        let (_, text) = respond_text(&mut engine, "ally \"dark seer\"");
        assert_eq!(text, "Ally pick: Dark Seer\n");
        let (_, text) = respond_text(&mut engine, "b Lion");
        assert_eq!(text, "Banned: Lion\n");

        let (quit, text) = respond_text(&mut engine, "s");
        assert!(!quit);
        assert_eq!(
            text,
            "Bans   : Lion\n\
             Allies : Dark Seer\n\
             Enemies: Medusa\n\
             Best picks:\n\
             \x20   +0  Anti-Mage\n\
             \x20   +0  Nature's Prophet\n"
        );
    }

    #[test]
    fn test_multi_word_hero_without_quotes() {
        let mut engine = engine();
        let (_, text) = respond_text(&mut engine, "a Dark   Seer");
        assert_eq!(text, "Ally pick: Dark Seer\n");
    }

    #[test]
    fn test_duplicate_pick_reports_error() {
        let mut engine = engine();
        respond_text(&mut engine, "ban lion");
        let (quit, text) = respond_text(&mut engine, "ally lion");
        assert!(!quit);
        assert_eq!(text, "error: Lion is already banned\n");
        assert!(engine.state().ally_picks.is_empty());
    }

    #[test]
    fn test_unknown_hero_reports_error() {
        let mut engine = engine();
        let (quit, text) = respond_text(&mut engine, "info zzzz");
        assert!(!quit);
        assert_eq!(text, "error: Unknown hero: zzzz\n");
    }

    #[test]
    fn test_missing_hero_argument() {
        let mut engine = engine();
        let (quit, text) = respond_text(&mut engine, "ban");
        assert!(!quit);
        assert!(text.starts_with("Hero argument required\nHelp:"));
    }

    #[test]
    fn test_invalid_command() {
        let mut engine = engine();
        let (quit, text) = respond_text(&mut engine, "pick am");
        assert!(!quit);
        assert!(text.starts_with("Invalid command\nHelp:"));
    }

    #[test]
    fn test_apostrophe_in_hero_name() {
        let mut engine = engine();
        let (quit, text) = respond_text(&mut engine, "ally Nature's Prophet");
        assert!(!quit);
        assert_eq!(text, "Ally pick: Nature's Prophet\n");
        let (_, text) = respond_text(&mut engine, "ban ish'kafel");
        assert_eq!(text, "Banned: Dark Seer\n");
        let (_, text) = respond_text(&mut engine, "info \"nature's   prophet\"");
        assert!(text.starts_with("Nature's Prophet\n"));
    }

    #[test]
    fn test_unbalanced_quote_is_taken_as_typed() {
        let mut engine = engine();
        let (quit, text) = respond_text(&mut engine, "ban \"dark seer");
        assert!(!quit);
        assert!(text.starts_with("error: Unknown hero: \"dark seer"));
        assert_eq!(engine.state(), &DraftState::default());
    }

    #[test]
    fn test_invalid_utf8_does_not_end_session() {
        let mut engine = engine();
        let text = run_session_bytes(&mut engine, b"ally np\nban caf\xe9\nstatus\nquit\n");
        assert!(text.contains("Ally pick: Nature's Prophet"));
        assert!(text.contains("error: Unknown hero: caf\u{fffd}"));
        assert!(text.contains("Bans   : -"));
        assert!(text.contains("Quitting"));
        assert_eq!(engine.state().ally_picks, vec!["Nature's Prophet"]);
        assert!(engine.state().banned.is_empty());
    }

    #[test]
    fn test_info_prints_record() {
        let mut engine = engine();
        let (_, text) = respond_text(&mut engine, "I AM");
        assert!(text.starts_with("Anti-Mage\n"));
        assert!(text.contains("bad against     : Medusa"));
    }

    #[test]
    fn test_session_reset() {
        let mut engine = engine();
        let text = run_session(&mut engine, "enemy medusa\nreset\nquit\nban lion\n");
        assert!(text.contains("Enemy pick: Medusa"));
        assert!(text.contains("Reset draft engine"));
        assert!(text.contains("Quitting"));
        // input after quit is never read
        assert!(!text.contains("Banned"));
        assert_eq!(engine.state(), &DraftState::default());
    }

    #[test]
    fn test_session_ends_at_eof() {
        let mut engine = engine();
        let text = run_session(&mut engine, "\n   \nenemy medusa\n");
        assert!(text.contains("Enemy pick: Medusa"));
        assert!(text.ends_with("> \n"));
        assert_eq!(engine.state().enemy_picks, vec!["Medusa"]);
    }
}
