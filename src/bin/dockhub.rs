use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use dockhub::{
    manifest_exports, register_builtin_tools, HubConfig, ResourceRegistry, ToolClients,
    ToolInvocation, ToolRegistry,
};

#[derive(Parser)]
#[command(name = "dockhub", version, about = "Docker Hub explorer CLI", author)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Tools {
        #[command(subcommand)]
        command: ToolCommand,
    },
    Resources {
        #[command(subcommand)]
        command: ResourceCommand,
    },
    Manifests {
        #[command(subcommand)]
        command: ManifestCommand,
    },
}

#[derive(Subcommand)]
enum ToolCommand {
    List,
    Call {
        name: String,
        #[arg(long, default_value = "{}")]
        input: String,
    },
}

#[derive(Subcommand)]
enum ResourceCommand {
    List,
    Get {
        uri: String,
    },
}

#[derive(Subcommand)]
enum ManifestCommand {
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = true)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dockhub::logging::LoggingConfig::init();

    let config = HubConfig::from_env();
    let clients = ToolClients::from_config(config)?;
    let mut registry = ToolRegistry::new();
    register_builtin_tools(&mut registry, &clients)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Tools { command } => match command {
            ToolCommand::List => handle_tools_list(&registry),
            ToolCommand::Call { name, input } => handle_tools_call(&registry, name, input).await?,
        },
        Command::Resources { command } => match command {
            ResourceCommand::List => handle_resources_list(),
            ResourceCommand::Get { uri } => handle_resources_get(clients, uri).await?,
        },
        Command::Manifests { command } => match command {
            ManifestCommand::Export { output, pretty } => {
                handle_manifests_export(&registry, output, pretty)?
            }
        },
    }
    Ok(())
}

fn handle_tools_list(registry: &ToolRegistry) {
    println!("{:<24} {}", "Name", "Description");
    for manifest in registry.manifests() {
        println!(
            "{:<24} {}",
            manifest.name,
            manifest.description.clone().unwrap_or_default()
        );
    }
}

async fn handle_tools_call(
    registry: &ToolRegistry,
    name: String,
    input: String,
) -> anyhow::Result<()> {
    let input: Value = serde_json::from_str(&input)?;
    let invocation = ToolInvocation::new(name, input);
    match registry.dispatch(invocation).await {
        Ok(response) => println!("{}", response.content),
        Err(err) => println!("Error calling tool: {err}"),
    }
    Ok(())
}

fn handle_resources_list() {
    println!("{:<32} {}", "URI Template", "Description");
    for template in ResourceRegistry::templates() {
        println!("{:<32} {}", template.uri_template, template.description);
    }
}

async fn handle_resources_get(clients: ToolClients, uri: String) -> anyhow::Result<()> {
    let resources = ResourceRegistry::new(clients);
    match resources.read(&uri).await {
        Ok(document) => println!("{document}"),
        Err(err) => println!("Error reading resource: {err}"),
    }
    Ok(())
}

fn handle_manifests_export(
    registry: &ToolRegistry,
    output: Option<PathBuf>,
    pretty: bool,
) -> anyhow::Result<()> {
    let entries = manifest_exports(registry);
    let value = json!(entries);

    let content = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    if let Some(path) = output {
        fs::write(&path, content)?;
        println!("Manifests exported to `{}`", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}
