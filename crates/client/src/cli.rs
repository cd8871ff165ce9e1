//! Command line surface of the `cochar` binary

use std::time::Duration;

use clap::Parser;

use cochar_domain::{Catalog, FieldBundle, FieldId, DEFAULT_COUNTRY_LABEL};

use crate::application::GenerateError;
use crate::infrastructure::ClientConfig;

/// Exit status for a failed submission: 2 when nothing was sent because the
/// form was wrong, 1 for everything the service or network caused.
pub fn failure_exit_code(err: &GenerateError) -> u8 {
    match err {
        GenerateError::Invalid(_) | GenerateError::Build(_) => 2,
        _ => 1,
    }
}

/// Generate a Call of Cthulhu investigator.
///
/// Select-style options take the labels shown on the web form, for example
/// `--country "(PL) Poland"` or `--era "Classic 1920"`. Run with
/// `--list-choices` to see them all.
#[derive(Debug, Parser)]
#[command(name = "cochar")]
#[command(about = "Generate a Call of Cthulhu investigator", long_about = None)]
pub struct Cli {
    /// Generator service origin [env: COCHAR_API_URL]
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout in milliseconds [env: COCHAR_REQUEST_TIMEOUT_MS]
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    /// 15 to 90
    #[arg(long)]
    pub age: Option<String>,

    #[arg(long)]
    pub year: Option<String>,

    #[arg(long, default_value = DEFAULT_COUNTRY_LABEL)]
    pub country: String,

    /// Male, Female or Random
    #[arg(long)]
    pub sex: Option<String>,

    /// Occupation name, "Optimal" or "Random"
    #[arg(long)]
    pub occupation: Option<String>,

    #[arg(long)]
    pub era: Option<String>,

    #[arg(long)]
    pub occupation_set: Option<String>,

    /// Comma separated, e.g. "criminal,lovecraftian"
    #[arg(long)]
    pub tags: Option<String>,

    /// Print the decoded character as JSON instead of the card
    #[arg(long)]
    pub json: bool,

    /// List the accepted labels and exit
    #[arg(long)]
    pub list_choices: bool,
}

impl Cli {
    /// The form as filled in on the command line. Options not given are
    /// left out of the bundle.
    pub fn to_bundle(&self) -> FieldBundle {
        let mut bundle = FieldBundle::new().with(FieldId::Country, self.country.as_str());
        let optional = [
            (FieldId::FirstName, &self.first_name),
            (FieldId::LastName, &self.last_name),
            (FieldId::Age, &self.age),
            (FieldId::Year, &self.year),
            (FieldId::Sex, &self.sex),
            (FieldId::Occupation, &self.occupation),
            (FieldId::Era, &self.era),
            (FieldId::OccupationSet, &self.occupation_set),
            (FieldId::Tags, &self.tags),
        ];
        for (field, value) in optional
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        {
            bundle.set(field, value);
        }
        bundle
    }

    /// Apply command line overrides on top of the environment config.
    pub fn apply_overrides(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(ms) = self.timeout_ms {
            config.request_timeout = Duration::from_millis(ms);
        }
        config
    }
}

/// Accepted labels per select-style option, one block per option.
pub fn render_choices(catalog: &Catalog) -> String {
    let blocks = [
        ("--country", catalog.countries().labels().collect::<Vec<_>>()),
        ("--sex", catalog.sexes().collect()),
        ("--era", catalog.eras().labels().collect()),
        ("--occupation-set", catalog.occupation_sets().labels().collect()),
        ("--tags", catalog.tags().collect()),
    ];

    let mut out = String::new();
    for (flag, labels) in blocks {
        out.push_str(flag);
        out.push('\n');
        for label in labels {
            out.push_str("  ");
            out.push_str(label);
            out.push('\n');
        }
    }
    out
}
