//! Terminal implementation of the wizard prompt surface.
//!
//! Thin `dialoguer` wrappers.  Navigation is exposed as explicit Back/Exit
//! rows appended to each list (the first step gets Exit only); Esc maps to
//! the same navigation.  Ctrl-C surfaces as [`PromptError::Interrupted`].

use std::path::{Path, PathBuf};

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use crate::config::{AppConfig, WizardDefaults, LANGUAGES};
use crate::stt::{ModelSize, Task};
use crate::wizard::{Nav, PromptError, RunConfig, SetupPrompt};

use super::summary::print_config_summary;

const BACK_ROW: &str = "< Back";
const EXIT_ROW: &str = "x Exit";
const AUTO_ROW: &str = "Auto-detect";
const CUSTOM_ROW: &str = "Other (type a code)";

pub struct TermPrompt {
    theme: ColorfulTheme,
    defaults: WizardDefaults,
}

impl TermPrompt {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            defaults: config.defaults.clone(),
        }
    }

    fn custom_language(&mut self) -> Result<Nav<Option<String>>, PromptError> {
        let entered: String = Input::with_theme(&self.theme)
            .with_prompt("Language code (e.g. 'pl')")
            .allow_empty(true)
            .interact_text()
            .map_err(map_err)?;

        let entered = entered.trim().to_string();
        if entered.is_empty() {
            // Nothing entered — fall back to the language list.
            return self.select_language();
        }
        Ok(Nav::Value(Some(entered)))
    }
}

fn map_err(err: dialoguer::Error) -> PromptError {
    match &err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            PromptError::Interrupted
        }
        _ => PromptError::Terminal(err.to_string()),
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

impl SetupPrompt for TermPrompt {
    fn select_language(&mut self) -> Result<Nav<Option<String>>, PromptError> {
        let mut items: Vec<String> = vec![AUTO_ROW.into()];
        items.extend(LANGUAGES.iter().map(|(code, name)| format!("{name} ({code})")));
        items.push(CUSTOM_ROW.into());
        items.push(EXIT_ROW.into());

        let default = LANGUAGES
            .iter()
            .position(|(code, _)| *code == self.defaults.language)
            .map(|i| i + 1)
            .unwrap_or(0);

        let picked = Select::with_theme(&self.theme)
            .with_prompt("Select language")
            .items(&items)
            .default(default)
            .interact_opt()
            .map_err(map_err)?;

        // Esc: no step before this one, so it means Exit.
        let Some(idx) = picked else { return Ok(Nav::Exit) };

        if idx == 0 {
            return Ok(Nav::Value(None));
        }
        if let Some((code, _)) = LANGUAGES.get(idx - 1) {
            return Ok(Nav::Value(Some((*code).to_string())));
        }
        if items[idx] == CUSTOM_ROW {
            return self.custom_language();
        }
        Ok(Nav::Exit)
    }

    fn select_model(&mut self) -> Result<Nav<ModelSize>, PromptError> {
        let mut items: Vec<String> =
            ModelSize::ALL.iter().map(|m| m.display_label()).collect();
        items.push(BACK_ROW.into());
        items.push(EXIT_ROW.into());

        let default = ModelSize::ALL
            .iter()
            .position(|m| *m == self.defaults.model_size)
            .unwrap_or(0);

        let picked = Select::with_theme(&self.theme)
            .with_prompt("Select model size")
            .items(&items)
            .default(default)
            .interact_opt()
            .map_err(map_err)?;

        Ok(match picked {
            None => Nav::Back,
            Some(idx) if idx < ModelSize::ALL.len() => Nav::Value(ModelSize::ALL[idx]),
            Some(idx) if idx == ModelSize::ALL.len() => Nav::Back,
            Some(_) => Nav::Exit,
        })
    }

    fn select_task(&mut self) -> Result<Nav<Task>, PromptError> {
        let mut items: Vec<String> = Task::ALL.iter().map(|t| t.to_string()).collect();
        items.push(BACK_ROW.into());
        items.push(EXIT_ROW.into());

        let default = Task::ALL
            .iter()
            .position(|t| *t == self.defaults.task)
            .unwrap_or(0);

        let picked = Select::with_theme(&self.theme)
            .with_prompt("Select task")
            .items(&items)
            .default(default)
            .interact_opt()
            .map_err(map_err)?;

        Ok(match picked {
            None => Nav::Back,
            Some(idx) if idx < Task::ALL.len() => Nav::Value(Task::ALL[idx]),
            Some(idx) if idx == Task::ALL.len() => Nav::Back,
            Some(_) => Nav::Exit,
        })
    }

    fn select_files(
        &mut self,
        discovered: &[PathBuf],
    ) -> Result<Nav<Vec<PathBuf>>, PromptError> {
        let names: Vec<String> = discovered.iter().map(|p| file_label(p)).collect();

        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt("Select audio files (space toggles; empty selection goes back)")
            .items(&names)
            .defaults(&vec![true; names.len()])
            .interact_opt()
            .map_err(map_err)?;

        Ok(match picked {
            None => Nav::Back,
            Some(selected) => Nav::Value(
                selected.into_iter().map(|i| discovered[i].clone()).collect(),
            ),
        })
    }

    fn confirm(&mut self, config: &RunConfig) -> Result<bool, PromptError> {
        print_config_summary(config);
        Confirm::with_theme(&self.theme)
            .with_prompt("Proceed with these settings?")
            .default(true)
            .interact()
            .map_err(map_err)
    }

    fn notify_no_files(&mut self, dir: &Path) {
        println!(
            "\n{}",
            style(format!("No audio files found in {}", dir.display())).yellow()
        );
    }
}
