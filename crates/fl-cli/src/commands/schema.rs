use fl_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `fieldline schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    if args.list {
        return output(&registry.list(), flags.format);
    }

    let name = args.name.as_deref().unwrap_or_default();
    let schema = registry.get(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        )
    })?;
    output(schema, flags.format)
}
