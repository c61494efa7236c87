mod args;
mod editor;
mod results;
mod review;
mod searcher;

use anyhow::Result;
use args::Args;
use clap::Parser;
use editor::Editor;

fn main() -> Result<()> {
    let args = Args::parse();

    searcher::check_availability()?;
    let editor = Editor::determine(args.editor.editor)?;

    let output = searcher::run(&args.pattern, &args.path)?;
    let records = results::parse_results(&output, results::BASE_PADDING);

    review::review_in_editor(&records, editor)
}
