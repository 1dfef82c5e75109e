//! Interactive play mode
//!
//! Text-based game where a human guesses letters against the referee.

use super::simulate::RoundConfig;
use crate::engine::{ErrorKind, GuessEngine};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Options for an interactive session
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    pub round: RoundConfig,
    /// Show how many words the referee is still juggling
    pub show_pool: bool,
}

/// How a round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { word: String },
    Lost { answer: String },
    Quit,
}

/// Run one interactive round on `input` and `output`
///
/// Each line of input is a single letter guess, or `quit` to stop.
///
/// # Errors
///
/// Returns an error on I/O failure, an invalid configuration, or if no
/// dictionary word has the requested length.
pub fn run_play<R: BufRead, W: Write>(
    dictionary: &[String],
    config: PlayConfig,
    input: &mut R,
    output: &mut W,
) -> Result<PlayOutcome> {
    let mut engine = GuessEngine::new(dictionary, config.round.length, config.round.max_guesses)
        .context("Invalid game settings")?;

    if engine.pool_size() == 0 {
        anyhow::bail!("No words of length {} in the dictionary", engine.length());
    }

    writeln!(output, "Welcome to hangman. Guess letters one at a time.")?;
    writeln!(output, "Type 'quit' to give up.")?;

    while !engine.is_solved() && engine.guesses_left() > 0 {
        writeln!(output)?;
        writeln!(output, "guesses left: {}", engine.guesses_left())?;
        if config.show_pool {
            writeln!(output, "words left:   {}", engine.pool_size())?;
        }
        writeln!(output, "guessed:      {}", format_guesses(&engine))?;
        writeln!(output, "current:      {}", engine.pattern()?)?;

        let Some(line) = read_line(input, output, "Your guess")? else {
            return Ok(PlayOutcome::Quit);
        };

        let guess = match parse_guess(&line) {
            Ok(Some(guess)) => guess,
            Ok(None) => return Ok(PlayOutcome::Quit),
            Err(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
        };

        match engine.record(guess) {
            Ok(0) => writeln!(output, "Sorry, there are no {guess}'s")?,
            Ok(1) => writeln!(output, "Yes, there is one {guess}")?,
            Ok(count) => writeln!(output, "Yes, there are {count} {guess}'s")?,
            Err(err) if err.kind() == ErrorKind::InvalidArgument => {
                writeln!(output, "You already guessed that")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(output)?;

    let first = engine
        .candidates()
        .next()
        .map(str::to_string)
        .unwrap_or_default();

    if engine.is_solved() {
        writeln!(output, "answer = {first}")?;
        writeln!(output, "You beat me")?;
        Ok(PlayOutcome::Won { word: first })
    } else {
        writeln!(output, "Sorry, you lose, the word was {first}")?;
        Ok(PlayOutcome::Lost { answer: first })
    }
}

/// Guessed letters as shown to the player, e.g. `[a, e, t]`
fn format_guesses(engine: &GuessEngine) -> String {
    let letters: Vec<String> = engine.guesses().iter().map(char::to_string).collect();
    format!("[{}]", letters.join(", "))
}

/// Interpret one input line
///
/// `Ok(None)` means the player wants to quit.
fn parse_guess(line: &str) -> Result<Option<char>, &'static str> {
    let trimmed = line.trim().to_lowercase();

    if matches!(trimmed.as_str(), "quit" | "q" | "exit") {
        return Ok(None);
    }

    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_alphabetic() => Ok(Some(ch)),
        (None, _) => Err("Please type a letter"),
        _ => Err("Please type a single letter"),
    }
}

/// Prompt and read a line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}? ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn config(max_guesses: i64) -> PlayConfig {
        PlayConfig {
            round: RoundConfig::new(4, max_guesses),
            show_pool: true,
        }
    }

    fn play(words: &[&str], config: PlayConfig, script: &str) -> (PlayOutcome, String) {
        let dictionary = words_from_slice(words);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run_play(&dictionary, config, &mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_round() {
        let (outcome, transcript) = play(&["bold"], config(3), "b\no\nl\nd\n");

        assert_eq!(outcome, PlayOutcome::Won { word: "bold".into() });
        assert!(transcript.contains("Yes, there is one o"));
        assert!(transcript.contains("answer = bold"));
        assert!(transcript.contains("You beat me"));
    }

    #[test]
    fn losing_round() {
        let (outcome, transcript) = play(&["bold", "cold"], config(1), "z\n");

        assert_eq!(outcome, PlayOutcome::Lost { answer: "bold".into() });
        assert!(transcript.contains("Sorry, there are no z's"));
        assert!(transcript.contains("Sorry, you lose"));
    }

    #[test]
    fn repeated_guess_is_reported_not_charged() {
        let (_, transcript) = play(&["bold", "cold"], config(2), "o\no\nquit\n");

        assert!(transcript.contains("You already guessed that"));
        assert!(transcript.contains("guessed:      [o]"));
        assert!(transcript.contains("guesses left: 2"));
    }

    #[test]
    fn quit_and_eof_stop_the_round() {
        let (outcome, _) = play(&["bold"], config(3), "quit\n");
        assert_eq!(outcome, PlayOutcome::Quit);

        let (outcome, _) = play(&["bold"], config(3), "");
        assert_eq!(outcome, PlayOutcome::Quit);
    }

    #[test]
    fn bad_input_reprompts() {
        let (_, transcript) = play(&["bold"], config(3), "\nab\n7\nq\n");
        assert!(transcript.contains("Please type a letter"));
        assert!(transcript.contains("Please type a single letter"));
    }

    #[test]
    fn missing_length_is_an_error() {
        let dictionary = words_from_slice(&["ox"]);
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert!(run_play(&dictionary, config(3), &mut input, &mut output).is_err());
    }

    #[test]
    fn parse_guess_variants() {
        assert_eq!(parse_guess(" E "), Ok(Some('e')));
        assert_eq!(parse_guess("quit"), Ok(None));
        assert!(parse_guess("").is_err());
        assert!(parse_guess("xy").is_err());
        assert!(parse_guess("3").is_err());
    }
}
