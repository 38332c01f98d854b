use crate::reference::ImageReference;

/// Caller-supplied knobs for compose generation. Port mappings and
/// environment variables are comma-separated strings, preserved in input
/// order; `include_db` appends the fixed MySQL companion service.
#[derive(Clone, Debug, Default)]
pub struct ComposeOptions {
    pub port_mapping: String,
    pub environment_variables: String,
    pub include_db: bool,
}

impl ComposeOptions {
    fn ports(&self) -> Vec<&str> {
        split_csv(&self.port_mapping)
    }

    fn env_vars(&self) -> Vec<&str> {
        split_csv(&self.environment_variables)
    }
}

fn split_csv(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Assembles a minimal docker-compose manifest for the image and wraps it in
/// a fenced Markdown block with a run hint.
pub fn compose_manifest(reference: &ImageReference, options: &ComposeOptions) -> String {
    let full_name = reference.repository_path();
    let service_name = reference.service_name();

    let mut compose = String::from("version: '3'\n\nservices:\n");
    compose.push_str(&format!("  {service_name}:\n"));
    compose.push_str(&format!("    image: {}:{}\n", full_name, reference.tag));
    compose.push_str("    restart: unless-stopped\n");

    let ports = options.ports();
    if !ports.is_empty() {
        compose.push_str("    ports:\n");
        for port in ports {
            compose.push_str(&format!("      - \"{port}\"\n"));
        }
    }

    let env_vars = options.env_vars();
    if !env_vars.is_empty() {
        compose.push_str("    environment:\n");
        for env_var in env_vars {
            compose.push_str(&format!("      - {env_var}\n"));
        }
    }

    if options.include_db {
        compose.push_str("    depends_on:\n");
        compose.push_str("      - db\n");
        compose.push_str("    networks:\n");
        compose.push_str("      - app_network\n");

        compose.push_str("\n  db:\n");
        compose.push_str("    image: mysql:5.7\n");
        compose.push_str("    restart: unless-stopped\n");
        compose.push_str("    networks:\n");
        compose.push_str("      - app_network\n");
        compose.push_str("    volumes:\n");
        compose.push_str("      - db_data:/var/lib/mysql\n");
        compose.push_str("    environment:\n");
        compose.push_str("      - MYSQL_ROOT_PASSWORD=rootpassword\n");
        compose.push_str("      - MYSQL_DATABASE=appdb\n");
        compose.push_str("      - MYSQL_USER=appuser\n");
        compose.push_str("      - MYSQL_PASSWORD=apppassword\n");

        compose.push_str("\nnetworks:\n");
        compose.push_str("  app_network:\n");
        compose.push_str("    driver: bridge\n");

        compose.push_str("\nvolumes:\n");
        compose.push_str("  db_data:\n");
    }

    format!(
        "# Docker Compose for {}:{}\n\n```yaml\n{}```\n\nRun with: `docker-compose up -d`",
        full_name, reference.tag, compose
    )
}
