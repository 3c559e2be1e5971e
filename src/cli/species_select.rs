//! Interactive species selection

use anyhow::{Context, Result};
use colored::*;
use std::io::{self, BufRead, Write};

/// Present species to the user on the terminal and read their choice
pub fn select_species(species: &[String], default: Option<&str>) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_species(&mut stdin.lock(), &mut stdout.lock(), species, default)
}

/// Prompt loop over arbitrary input/output streams
pub fn prompt_species<R, W>(
    input: &mut R,
    output: &mut W,
    species: &[String],
    default: Option<&str>,
) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    if species.is_empty() {
        anyhow::bail!("No species found in the dataset. Check the input file has a Species column.");
    }

    writeln!(output, "{}", "Species in catch log:".bright_green().bold())?;
    writeln!(output)?;
    for (i, name) in species.iter().enumerate() {
        let marker = if Some(name.as_str()) == default {
            " (last used)".bright_black().to_string()
        } else {
            String::new()
        };
        writeln!(
            output,
            "  {}. {}{}",
            (i + 1).to_string().bright_yellow().bold(),
            name.bright_cyan(),
            marker
        )?;
    }
    writeln!(output)?;
    write!(output, "{}", "Select species (number or name): ".bright_white())?;
    output.flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read user input")?;

    parse_selection(&line, species, default)
}

/// Resolve a typed answer: a 1-based number, an exact name, or blank for the default
pub fn parse_selection(answer: &str, species: &[String], default: Option<&str>) -> Result<String> {
    let answer = answer.trim();

    if answer.is_empty() {
        return default
            .filter(|d| species.iter().any(|s| s == *d))
            .map(str::to_string)
            .context("No species selected");
    }

    if let Ok(selection) = answer.parse::<usize>() {
        if selection == 0 || selection > species.len() {
            anyhow::bail!(
                "Invalid selection. Please choose a number between 1 and {}",
                species.len()
            );
        }
        return Ok(species[selection - 1].clone());
    }

    species
        .iter()
        .find(|s| s.eq_ignore_ascii_case(answer))
        .cloned()
        .with_context(|| format!("Unknown species '{}'", answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn species() -> Vec<String> {
        vec![
            "Black Marlin".to_string(),
            "Dorado".to_string(),
            "Sailfish".to_string(),
        ]
    }

    #[test]
    fn test_parse_selection_by_number() {
        assert_eq!(parse_selection("2\n", &species(), None).unwrap(), "Dorado");
        assert!(parse_selection("0", &species(), None).is_err());
        assert!(parse_selection("4", &species(), None).is_err());
    }

    #[test]
    fn test_parse_selection_by_name() {
        assert_eq!(
            parse_selection("sailfish", &species(), None).unwrap(),
            "Sailfish"
        );
        assert!(parse_selection("Wahoo", &species(), None).is_err());
    }

    #[test]
    fn test_parse_selection_blank_uses_default() {
        assert_eq!(
            parse_selection("  \n", &species(), Some("Dorado")).unwrap(),
            "Dorado"
        );
        assert!(parse_selection("", &species(), None).is_err());
        // A remembered species no longer in the dataset is not offered
        assert!(parse_selection("", &species(), Some("Wahoo")).is_err());
    }

    #[test]
    fn test_prompt_lists_and_reads() {
        let mut input = Cursor::new("3\n");
        let mut output = Vec::new();

        let chosen = prompt_species(&mut input, &mut output, &species(), Some("Sailfish")).unwrap();
        let shown = String::from_utf8(output).unwrap();

        assert_eq!(chosen, "Sailfish");
        assert!(shown.contains("Black Marlin"));
        assert!(shown.contains("last used"));
    }

    #[test]
    fn test_prompt_empty_species() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(prompt_species(&mut input, &mut output, &[], None).is_err());
    }
}
