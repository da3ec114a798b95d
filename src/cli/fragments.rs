//! `grammargen fragments`
//!
//! Without a name, lists every catalog fragment with its tier, recipe kind and inputs.
//! With a name, prints that fragment's resolved text.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use super::CliConfig;
use crate::fragments::{FragmentDef, catalog};
use crate::resolver::{BuildPlan, Registry, assemble, plan};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// List the fragment catalog, or print one resolved fragment.
#[derive(Args, Debug)]
pub struct FragmentsCommand {
    /// Fragment to print (case-sensitive)
    name: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// One row of the listing.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct FragmentRow {
    name: String,
    tier: usize,
    kind: String,
    inputs: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    summary: String,
    bytes: usize,
}

#[derive(Debug, Serialize)]
struct FragmentText<'a> {
    name: &'a str,
    text: &'a str,
}

impl FragmentsCommand {
    pub fn execute(self, _config: &CliConfig) -> Result<()> {
        let defs = catalog();
        let plan = plan(&defs)?;
        let registry = assemble(&defs)?;

        match self.name.as_deref() {
            Some(name) => self.print_one(name, &registry),
            None => {
                let rows = rows(&defs, &plan, &registry);
                match self.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                    OutputFormat::Text => print_table(&rows),
                }
                Ok(())
            }
        }
    }

    fn print_one(&self, name: &str, registry: &Registry) -> Result<()> {
        let Some(text) = registry.get(name) else {
            let suggestions = registry.similar_names(name);
            if suggestions.is_empty() {
                anyhow::bail!("Unknown fragment '{name}'");
            }
            anyhow::bail!("Unknown fragment '{name}'. Did you mean: {}?", suggestions.join(", "));
        };

        match self.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&FragmentText {
                        name,
                        text
                    })?
                );
            }
            OutputFormat::Text => println!("{text}"),
        }
        Ok(())
    }
}

/// Rows in build order.
fn rows(defs: &[FragmentDef], plan: &BuildPlan, registry: &Registry) -> Vec<FragmentRow> {
    plan.steps()
        .iter()
        .map(|step| {
            let def = &defs[step.index];
            FragmentRow {
                name: def.name.clone(),
                tier: step.tier,
                kind: def.recipe.to_string(),
                inputs: step.inputs.clone(),
                summary: def.summary.to_string(),
                bytes: registry.get(&def.name).map_or(0, str::len),
            }
        })
        .collect()
}

fn print_table(rows: &[FragmentRow]) {
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for row in rows {
        let inputs = if row.inputs.is_empty() {
            String::new()
        } else {
            format!(" <- {}", row.inputs.join(", "))
        };
        println!(
            "{}  tier {}  {:<7}{}{}",
            format!("{:<width$}", row.name).bold(),
            row.tier,
            row.kind,
            inputs.cyan(),
            if row.summary.is_empty() {
                String::new()
            } else {
                format!("  {}", row.summary.dimmed())
            },
        );
    }
    println!("\n{} fragments", rows.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_build_order() {
        let defs = catalog();
        let plan = plan(&defs).unwrap();
        let registry = assemble(&defs).unwrap();
        let rows = rows(&defs, &plan, &registry);

        assert_eq!(rows.len(), defs.len());
        let first_tier_one = rows.iter().position(|r| r.tier == 1).unwrap();
        assert!(rows[..first_tier_one].iter().all(|r| r.tier == 0));
        assert!(rows[first_tier_one..].iter().all(|r| r.tier == 1));

        let dictmaker = rows.iter().find(|r| r.name == "DICTMAKER").unwrap();
        assert_eq!(dictmaker.kind, "bind");
        assert_eq!(dictmaker.inputs, vec!["COLON", "COMMA"]);
        assert!(dictmaker.bytes > 0);
    }

    #[test]
    fn test_row_json_shape() {
        let row = FragmentRow {
            name: "COLON".to_string(),
            tier: 0,
            kind: "text".to_string(),
            inputs: Vec::new(),
            summary: String::new(),
            bytes: 7,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["name"], "COLON");
        assert_eq!(json["tier"], 0);
        assert!(json.get("summary").is_none());
    }
}
