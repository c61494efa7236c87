use crate::editor::Editor;
use clap::Parser;
use std::path::PathBuf;

pub const RGREV_EDITOR_ENV: &str = "RGREV_EDITOR";
pub const VISUAL_ENV: &str = "VISUAL";
pub const EDITOR_ENV: &str = "EDITOR";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Regular expression passed to ripgrep.
    pub pattern: String,
    /// File or directory to search. Directories are searched recursively.
    /// If not specified, searching starts from current directory.
    #[clap(default_value = ".")]
    pub path: PathBuf,
    #[clap(flatten)]
    pub editor: EditorOpt,
}

#[derive(Parser, Debug)]
pub struct EditorOpt {
    /// Text editor used to review the results.
    #[clap(long, value_enum)]
    pub editor: Option<Editor>,
}
