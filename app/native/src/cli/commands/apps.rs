//! Voice application listing.

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::config;
use crate::error::HomescreenError;
use crate::modules::apps::{VoiceApplication, build_application_list};

/// Maximum width of the thumbnail column.
const THUMBNAIL_WIDTH: usize = 48;

#[derive(Tabled)]
struct AppRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Folder")]
    folder: String,
    #[tabled(rename = "Thumbnail")]
    thumbnail: String,
}

impl From<&VoiceApplication> for AppRow {
    fn from(app: &VoiceApplication) -> Self {
        Self {
            name: app.name.clone(),
            action: app.action.clone(),
            folder: app.folder.clone(),
            thumbnail: output::truncate(&app.thumbnail, THUMBNAIL_WIDTH),
        }
    }
}

/// Lists the voice applications found in the skills directory.
///
/// # Errors
///
/// Returns an error if the list cannot be serialized.
pub fn execute(json: bool) -> Result<(), HomescreenError> {
    let skills_dir = config::init().paths().skills_dir;
    let apps = build_application_list(&skills_dir);

    if json {
        output::print_highlighted_json(&serde_json::to_value(&apps)?);
        return Ok(());
    }

    let Some(apps) = apps else {
        println!(
            "{} {}",
            "Skills directory not found:".red(),
            skills_dir.display()
        );
        return Ok(());
    };

    if apps.is_empty() {
        println!("{}", "No voice applications installed.".dimmed());
        return Ok(());
    }

    let rows: Vec<AppRow> = apps.iter().map(AppRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();

    println!("{}", format!("Voice applications ({})", apps.len()).bold());
    println!("{table}");
    Ok(())
}
