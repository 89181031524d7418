use crate::record::FileRecord;
use std::collections::HashMap;
use std::fmt;

pub const ACTION_MESSAGE: &str = "All files above will be deleted, continue?";
pub const PICK_MESSAGE: &str = "Select files to delete";

/// Answer to the top-level confirmation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
    Pick,
}

impl Choice {
    /// Options in the order they are offered.
    pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::Pick];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Pick => "Pick",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interactive capability used by [`confirm`].
///
/// Implementations answer [`Choice::No`] or an empty pick when the user
/// cannot be asked, so a failed prompt always ends in an abort.
pub trait Prompter {
    /// Ask whether to delete everything, nothing, or pick manually.
    fn ask_action(&mut self, message: &str) -> Choice;

    /// Let the user uncheck names; every name starts checked.
    /// Returns the names left checked.
    fn pick(&mut self, message: &str, names: &[String]) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    DryRun,
    AutoYes,
    Prompt,
}

impl ConfirmMode {
    #[must_use]
    pub const fn from_flags(dry_run: bool, yes: bool) -> Self {
        if dry_run {
            Self::DryRun
        } else if yes {
            Self::AutoYes
        } else {
            Self::Prompt
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    DryRun,
    Confirmed(Vec<FileRecord>),
    Aborted,
}

/// Decide which of the selected records to delete.
pub fn confirm<P: Prompter + ?Sized>(
    mode: ConfirmMode,
    selection: Vec<FileRecord>,
    prompter: &mut P,
) -> Confirmation {
    match mode {
        ConfirmMode::DryRun => Confirmation::DryRun,
        ConfirmMode::AutoYes => Confirmation::Confirmed(selection),
        ConfirmMode::Prompt => match prompter.ask_action(ACTION_MESSAGE) {
            Choice::Yes => Confirmation::Confirmed(selection),
            Choice::No => Confirmation::Aborted,
            Choice::Pick => {
                let names: Vec<String> = selection.iter().map(|r| r.name().to_owned()).collect();
                let picked = prompter.pick(PICK_MESSAGE, &names);
                let records = pick_records(selection, picked);
                log::debug!("{} file(s) picked", records.len());
                if records.is_empty() {
                    Confirmation::Aborted
                } else {
                    Confirmation::Confirmed(records)
                }
            }
        },
    }
}

/// Map picked names back to records, in the order they were picked.
fn pick_records(selection: Vec<FileRecord>, picked: Vec<String>) -> Vec<FileRecord> {
    let mut by_name: HashMap<String, FileRecord> = selection
        .into_iter()
        .map(|r| (r.name().to_owned(), r))
        .collect();

    picked
        .into_iter()
        .filter_map(|name| by_name.remove(&name))
        .collect()
}

/// [`Prompter`] that replays fixed answers.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone)]
pub struct ScriptedPrompter {
    choice: Choice,
    picked: Option<Vec<String>>,
    pub actions_asked: usize,
    pub picks_asked: usize,
}

#[cfg(any(test, feature = "test-support"))]
impl ScriptedPrompter {
    #[must_use]
    pub fn new(choice: Choice) -> Self {
        Self {
            choice,
            picked: None,
            actions_asked: 0,
            picks_asked: 0,
        }
    }

    /// Answer [`Choice::Pick`], then keep only `names` checked.
    #[must_use]
    pub fn picking<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            picked: Some(names.into_iter().map(Into::into).collect()),
            ..Self::new(Choice::Pick)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Prompter for ScriptedPrompter {
    fn ask_action(&mut self, _message: &str) -> Choice {
        self.actions_asked += 1;
        self.choice
    }

    fn pick(&mut self, _message: &str, names: &[String]) -> Vec<String> {
        self.picks_asked += 1;
        // 指定がなければ全選択のまま確定
        self.picked.clone().unwrap_or_else(|| names.to_vec())
    }
}
