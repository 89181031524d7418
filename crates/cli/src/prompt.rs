// crates/cli/src/prompt.rs
use delete_old_files_engine::confirm::{Choice, Prompter};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{MultiSelect, Select};

/// [`Prompter`] backed by terminal widgets on stderr.
///
/// A prompt that cannot be shown or read (no terminal, Ctrl-C) counts as
/// "No", so nothing is deleted and the run ends as aborted.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

fn choice_from(answer: dialoguer::Result<usize>) -> Choice {
    match answer {
        Ok(index) => Choice::ALL.get(index).copied().unwrap_or(Choice::No),
        Err(e) => {
            log::warn!("prompt failed, treating as No: {e}");
            Choice::No
        }
    }
}

fn picked_from(answer: dialoguer::Result<Vec<usize>>, names: &[String]) -> Vec<String> {
    match answer {
        Ok(indices) => indices
            .into_iter()
            .filter_map(|i| names.get(i).cloned())
            .collect(),
        Err(e) => {
            log::warn!("pick prompt failed, nothing selected: {e}");
            Vec::new()
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask_action(&mut self, message: &str) -> Choice {
        let labels: Vec<&str> = Choice::ALL.iter().map(|c| c.label()).collect();
        let default = Choice::ALL
            .iter()
            .position(|c| *c == Choice::No)
            .unwrap_or_default();

        choice_from(
            Select::with_theme(&self.theme)
                .with_prompt(message)
                .items(&labels)
                .default(default)
                .interact(),
        )
    }

    fn pick(&mut self, message: &str, names: &[String]) -> Vec<String> {
        let checked = vec![true; names.len()];

        picked_from(
            MultiSelect::with_theme(&self.theme)
                .with_prompt(message)
                .items(names)
                .defaults(&checked)
                .interact(),
            names,
        )
    }
}
