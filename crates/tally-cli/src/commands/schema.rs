use schemars::schema_for;
use tally_core::feedback::{FeedbackRecord, TagTally};
use tally_report::{ProgramOverview, StartupReport};

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `tally schema <type>`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(args.type_name)?;
    // A schema is a document, not a row set.
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output(&schema, format)
}

fn schema_value(type_name: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        SchemaType::Overview => schema_for!(ProgramOverview),
        SchemaType::Startup => schema_for!(StartupReport),
        SchemaType::FeedbackRecord => schema_for!(FeedbackRecord),
        SchemaType::TagTally => schema_for!(TagTally),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_an_object_schema() {
        for type_name in [
            SchemaType::Overview,
            SchemaType::Startup,
            SchemaType::FeedbackRecord,
            SchemaType::TagTally,
        ] {
            let schema = schema_value(type_name).expect("schema should serialize");
            assert!(schema.is_object(), "{type_name:?}");
            assert!(schema.get("$schema").is_some(), "{type_name:?}");
        }
    }

    #[test]
    fn feedback_record_schema_lists_fields() {
        let schema = schema_value(SchemaType::FeedbackRecord).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for field in ["evaluator", "category", "score", "comment"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }
}
