use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use git_svn_tagger::git::Git2Repository;
use git_svn_tagger::{sync, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-svn-tagger",
    about = "Recreate git-svn mirrored Subversion tags as native lightweight tags"
)]
struct Args {
    #[arg(help = "Path to the git working tree to scan")]
    work_tree: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.work_tree.is_dir() {
        ui::display_error(&format!(
            "'{}' does not exist or is not a directory",
            args.work_tree.display()
        ));
        std::process::exit(1);
    }

    let repo = match Git2Repository::open(&args.work_tree) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let report = sync::sync_tags(&repo)?;
    ui::display_report(&report);

    Ok(())
}
