use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load the mission catalog and list mission progress.
    Missions(CatalogArgs),
    /// Check a point against a mission's geofence.
    Check(CheckArgs),
    /// Replay a JSONL command script through the engine.
    Replay(ReplayArgs),
    /// Measure the path length through a sequence of points.
    Measure(MeasureArgs),
    /// Show the category/subcategory taxonomy.
    Taxonomy(TaxonomyArgs),
    /// Print JSON Schemas for the data contracts.
    Schema(SchemaArgs),
}

/// Catalog override shared by catalog-backed commands.
#[derive(Clone, Debug, Args)]
pub struct CatalogArgs {
    /// Mission catalog file (JSON array or TOML); defaults to `catalog.path`.
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for `fieldline check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    #[arg(long)]
    pub mission: String,
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Arguments for `fieldline replay`.
#[derive(Clone, Debug, Args)]
pub struct ReplayArgs {
    /// JSONL file with one command per line.
    pub script: String,
    #[command(flatten)]
    pub catalog: CatalogArgs,
    /// Write the export document into this directory (defaults to `export.dir`).
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub export: Option<String>,
    /// Append drained display events to this JSONL file.
    #[arg(long)]
    pub events: Option<String>,
}

/// Arguments for `fieldline measure`.
#[derive(Clone, Debug, Args)]
pub struct MeasureArgs {
    /// Point as `LAT,LNG`; repeat for each vertex.
    #[arg(long = "point", required = true, allow_hyphen_values = true)]
    pub points: Vec<String>,
}

/// Arguments for `fieldline taxonomy`.
#[derive(Clone, Debug, Args)]
pub struct TaxonomyArgs {
    /// Only show this category.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `fieldline schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name, e.g. `export_document`.
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,
    /// List registered schema names.
    #[arg(long, conflicts_with = "name")]
    pub list: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use crate::cli::{Cli, Commands};

    #[test]
    fn check_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "fieldline", "check", "--mission", "m1", "--lat", "-33.86", "--lng", "151.2",
        ])
        .expect("cli should parse");
        let Commands::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.mission, "m1");
        assert!((args.lat + 33.86).abs() < f64::EPSILON);
        assert!(args.catalog.catalog.is_none());
    }

    #[test]
    fn replay_export_flag_is_optional_valued() {
        let cli = Cli::try_parse_from(["fieldline", "replay", "session.jsonl", "--export"])
            .expect("cli should parse");
        let Commands::Replay(args) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.script, "session.jsonl");
        assert_eq!(args.export.as_deref(), Some(""));

        let cli = Cli::try_parse_from(["fieldline", "replay", "s.jsonl", "--export", "out"])
            .expect("cli should parse");
        let Commands::Replay(args) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.export.as_deref(), Some("out"));
    }

    #[test]
    fn measure_collects_repeated_points() {
        let cli = Cli::try_parse_from([
            "fieldline", "measure", "--point", "6.75,125.356", "--point", "-6.76,125.357",
        ])
        .expect("cli should parse");
        let Commands::Measure(args) = cli.command else {
            panic!("expected measure");
        };
        assert_eq!(args.points, ["6.75,125.356", "-6.76,125.357"]);
    }

    #[test]
    fn schema_requires_name_or_list() {
        assert!(Cli::try_parse_from(["fieldline", "schema"]).is_err());
        assert!(Cli::try_parse_from(["fieldline", "schema", "--list"]).is_ok());
        assert!(Cli::try_parse_from(["fieldline", "schema", "entry"]).is_ok());
    }
}
