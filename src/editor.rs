use crate::args::{EDITOR_ENV, RGREV_EDITOR_ENV, VISUAL_ENV};
use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use itertools::Itertools;
use std::{
    ffi::OsStr,
    fmt::{self, Debug, Display, Formatter},
    path::Path,
    process::{Child, Command},
};
use strum::Display;

#[derive(Display, Default, PartialEq, Eq, Copy, Clone, Debug, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Editor {
    Vim,
    #[default]
    Neovim,
    Nvim,
    Nano,
    Code,
    Vscode,
    CodeInsiders,
    Emacs,
    Emacsclient,
    Hx,
    Helix,
    Subl,
    SublimeText,
    Micro,
    Less,
}

impl Editor {
    /// Resolves which editor to use: the CLI flag wins, then
    /// `$RGREV_EDITOR`, `$VISUAL` and `$EDITOR` in that order.
    pub fn determine(editor_cli: Option<Editor>) -> Result<Editor> {
        let add_error_context = |e: String, env_value: String, env_name: &str| {
            let possible_variants = Editor::value_variants()
                .iter()
                .map(Editor::to_string)
                .join(", ");
            anyhow!(e).context(format!(
                "\"{env_value}\" read from ${env_name}, possible variants: [{possible_variants}]",
            ))
        };

        let read_from_env = |name| {
            std::env::var(name).ok().map(|value| {
                Editor::from_str(&extract_editor_name(&value), false)
                    .map_err(|error| add_error_context(error, value, name))
            })
        };

        editor_cli
            .map(Ok)
            .or_else(|| read_from_env(RGREV_EDITOR_ENV))
            .or_else(|| read_from_env(VISUAL_ENV))
            .or_else(|| read_from_env(EDITOR_ENV))
            .unwrap_or(Ok(Editor::default()))
    }

    /// Opens the scratch file in the editor, attached to the terminal.
    pub fn spawn(self, scratch: &Path) -> Result<Child> {
        let mut command = EditorCommand::new(self, scratch);

        command.spawn()
    }
}

fn extract_editor_name(input: &str) -> String {
    let mut split = input.rsplit('/');
    split.next().unwrap_or(input).into()
}

struct EditorCommand(Command);

impl EditorCommand {
    fn new(editor: Editor, scratch: &Path) -> Self {
        let mut command = Command::new(Self::program(editor));
        command.args(Self::args(editor, scratch));
        Self(command)
    }

    fn program(editor: Editor) -> &'static str {
        match editor {
            Editor::Vim => "vim",
            Editor::Neovim | Editor::Nvim => "nvim",
            Editor::Nano => "nano",
            Editor::Code | Editor::Vscode => "code",
            Editor::CodeInsiders => "code-insiders",
            Editor::Emacs => "emacs",
            Editor::Emacsclient => "emacsclient",
            Editor::Hx => "hx",
            Editor::Helix => "helix",
            Editor::Subl | Editor::SublimeText => "subl",
            Editor::Micro => "micro",
            Editor::Less => "less",
        }
    }

    fn args(editor: Editor, scratch: &Path) -> Vec<String> {
        let scratch = scratch.display().to_string();
        match editor {
            // GUI editors return immediately unless told to wait; the
            // scratch file is deleted once review ends.
            Editor::Code | Editor::Vscode | Editor::CodeInsiders => {
                vec!["--wait".into(), scratch]
            }
            Editor::Subl | Editor::SublimeText => vec!["--wait".into(), scratch],
            Editor::Emacs => vec!["-nw".into(), scratch],
            _ => vec![scratch],
        }
    }

    fn spawn(&mut self) -> Result<Child> {
        which::which(self.0.get_program()).with_context(|| {
            format!(
                "could not find editor executable '{}'",
                self.0.get_program().to_string_lossy()
            )
        })?;

        let command_line = self.to_string();
        self.0
            .spawn()
            .with_context(|| format!("failed to launch editor: \"{command_line}\""))
    }
}

impl Display for EditorCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.0.get_program().to_string_lossy(),
            self.0.get_args().map(OsStr::to_string_lossy).join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::EditorOpt;
    use clap::Parser;
    use lazy_static::lazy_static;
    use test_case::test_case;

    lazy_static! {
        static ref SERIAL_TEST: std::sync::Mutex<()> = Default::default();
    }

    #[test_case(Some("nano"), Some("vim"), None, Some("neovim") => matches Ok(Editor::Nano); "cli")]
    #[test_case(None, Some("nano"), None, Some("neovim") => matches Ok(Editor::Nano); "rgrev env")]
    #[test_case(None, None, Some("nano"), Some("helix") => matches Ok(Editor::Nano); "visual env")]
    #[test_case(None, None, None, Some("nano") => matches Ok(Editor::Nano); "editor env")]
    #[test_case(Some("unsupported-editor"), None, None, None => matches Err(_); "unsupported cli")]
    #[test_case(None, Some("unsupported-editor"), None, None => matches Err(_); "unsupported rgrev env")]
    #[test_case(None, None, None, Some("unsupported-editor") => matches Err(_); "unsupported editor env")]
    #[test_case(None, None, None, None => matches Ok(Editor::Neovim); "default editor")]
    #[test_case(None, Some("/usr/bin/nano"), None, None => matches Ok(Editor::Nano); "rgrev env path")]
    #[test_case(None, None, None, Some("/usr/bin/nano") => matches Ok(Editor::Nano); "editor env path")]
    fn editor_options_precedence(
        cli_option: Option<&str>,
        rgrev_editor_env: Option<&str>,
        visual_env: Option<&str>,
        editor_env: Option<&str>,
    ) -> Result<Editor> {
        let _guard = SERIAL_TEST.lock().unwrap();
        std::env::remove_var(RGREV_EDITOR_ENV);
        std::env::remove_var(VISUAL_ENV);
        std::env::remove_var(EDITOR_ENV);

        let opt = if let Some(cli_option) = cli_option {
            EditorOpt::try_parse_from(["test", "--editor", cli_option])
        } else {
            EditorOpt::try_parse_from(["test"])
        };

        if let Some(rgrev_editor_env) = rgrev_editor_env {
            std::env::set_var(RGREV_EDITOR_ENV, rgrev_editor_env);
        }

        if let Some(visual_env) = visual_env {
            std::env::set_var(VISUAL_ENV, visual_env);
        }

        if let Some(editor_env) = editor_env {
            std::env::set_var(EDITOR_ENV, editor_env);
        }

        Editor::determine(opt?.editor)
    }

    const SCRATCH: &str = ".rgrev42";

    #[test_case(Editor::Vim => format!("vim {SCRATCH}"); "vim command")]
    #[test_case(Editor::Neovim => format!("nvim {SCRATCH}"); "neovim command")]
    #[test_case(Editor::Nvim => format!("nvim {SCRATCH}"); "nvim command")]
    #[test_case(Editor::Nano => format!("nano {SCRATCH}"); "nano command")]
    #[test_case(Editor::Code => format!("code --wait {SCRATCH}"); "code command")]
    #[test_case(Editor::Vscode => format!("code --wait {SCRATCH}"); "vscode command")]
    #[test_case(Editor::CodeInsiders => format!("code-insiders --wait {SCRATCH}"); "code-insiders command")]
    #[test_case(Editor::Emacs => format!("emacs -nw {SCRATCH}"); "emacs command")]
    #[test_case(Editor::Emacsclient => format!("emacsclient {SCRATCH}"); "emacsclient command")]
    #[test_case(Editor::Hx => format!("hx {SCRATCH}"); "hx command")]
    #[test_case(Editor::Helix => format!("helix {SCRATCH}"); "helix command")]
    #[test_case(Editor::Subl => format!("subl --wait {SCRATCH}"); "subl command")]
    #[test_case(Editor::SublimeText => format!("subl --wait {SCRATCH}"); "sublime text command")]
    #[test_case(Editor::Micro => format!("micro {SCRATCH}"); "micro command")]
    #[test_case(Editor::Less => format!("less {SCRATCH}"); "less command")]
    fn editor_command(editor: Editor) -> String {
        EditorCommand::new(editor, Path::new(SCRATCH)).to_string()
    }
}
