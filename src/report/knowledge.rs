//! Static lookup tables backing the report generators. Read-only after
//! startup; keys are lowercase.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const DEFAULT_PROFILE_KEY: &str = "web";

pub struct RuntimeProfile {
    pub cpu: &'static str,
    pub memory: &'static str,
    pub io: &'static str,
    pub network: &'static str,
    pub orchestration: [&'static str; 3],
    pub limits: &'static str,
}

pub static RUNTIME_PROFILES: Lazy<HashMap<&'static str, RuntimeProfile>> = Lazy::new(|| {
    let mut profiles = HashMap::new();
    profiles.insert(
        "web",
        RuntimeProfile {
            cpu: "Medium",
            memory: "Medium",
            io: "High",
            network: "High",
            orchestration: [
                "Use horizontal scaling for increased traffic",
                "Implement health checks for better reliability",
                "Consider using an ingress controller for routing",
            ],
            limits: "resources:\n  limits:\n    cpu: 1\n    memory: 512Mi\n  requests:\n    cpu: 200m\n    memory: 256Mi",
        },
    );
    profiles.insert(
        "database",
        RuntimeProfile {
            cpu: "Medium to High",
            memory: "High",
            io: "Very High",
            network: "Medium",
            orchestration: [
                "Use persistent volumes for data storage",
                "Consider using StatefulSets in Kubernetes",
                "Implement regular backup strategies",
            ],
            limits: "resources:\n  limits:\n    cpu: 2\n    memory: 2Gi\n  requests:\n    cpu: 500m\n    memory: 1Gi",
        },
    );
    profiles.insert(
        "cache",
        RuntimeProfile {
            cpu: "Low",
            memory: "High",
            io: "Medium",
            network: "Medium",
            orchestration: [
                "Use memory limits to prevent OOM issues",
                "Consider using anti-affinity rules for high availability",
                "Implement proper eviction policies",
            ],
            limits: "resources:\n  limits:\n    cpu: 1\n    memory: 1Gi\n  requests:\n    cpu: 200m\n    memory: 512Mi",
        },
    );
    profiles.insert(
        "api",
        RuntimeProfile {
            cpu: "Medium",
            memory: "Medium",
            io: "Low",
            network: "High",
            orchestration: [
                "Use auto-scaling based on CPU/memory usage",
                "Implement rate limiting for stability",
                "Use readiness probes for zero-downtime deployments",
            ],
            limits: "resources:\n  limits:\n    cpu: 1\n    memory: 512Mi\n  requests:\n    cpu: 200m\n    memory: 256Mi",
        },
    );
    profiles.insert(
        "batch",
        RuntimeProfile {
            cpu: "High",
            memory: "Medium to High",
            io: "Medium to High",
            network: "Low",
            orchestration: [
                "Use job controllers for managing batch processes",
                "Consider resource quotas to prevent cluster saturation",
                "Implement proper retry mechanisms",
            ],
            limits: "resources:\n  limits:\n    cpu: 2\n    memory: 1Gi\n  requests:\n    cpu: 500m\n    memory: 512Mi",
        },
    );
    profiles
});

pub fn runtime_profile(app_type: &str) -> &'static RuntimeProfile {
    let key = app_type.to_lowercase();
    RUNTIME_PROFILES
        .get(key.as_str())
        .unwrap_or_else(|| &RUNTIME_PROFILES[DEFAULT_PROFILE_KEY])
}

pub struct SecurityIssue {
    pub severity: &'static str,
    pub issue: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
}

pub const LATEST_TAG_ISSUE: &str = "Latest tag";

pub static SECURITY_CATALOG: &[SecurityIssue] = &[
    SecurityIssue {
        severity: "HIGH",
        issue: "Running as root",
        description: "Container processes should not run as root",
        recommendation: "Use USER directive to run as non-root user",
    },
    SecurityIssue {
        severity: "MEDIUM",
        issue: "No health check",
        description: "Missing HEALTHCHECK instruction",
        recommendation: "Add HEALTHCHECK to monitor container health",
    },
    SecurityIssue {
        severity: "MEDIUM",
        issue: LATEST_TAG_ISSUE,
        description: "Using 'latest' tag is not recommended",
        recommendation: "Use specific version tags for reproducibility",
    },
    SecurityIssue {
        severity: "LOW",
        issue: "Large image size",
        description: "Large images have more potential vulnerabilities",
        recommendation: "Use smaller base images like Alpine",
    },
];

pub static DOCKERFILE_TEMPLATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut templates = HashMap::new();
    templates.insert(
        "drupal",
        r#"FROM php:8.1-apache

# Install required PHP extensions
RUN apt-get update && apt-get install -y \
    libfreetype6-dev \
    libjpeg62-turbo-dev \
    libpng-dev \
    libpq-dev \
    libzip-dev \
    && docker-php-ext-configure gd --with-freetype --with-jpeg \
    && docker-php-ext-install -j$(nproc) gd mysqli pdo pdo_mysql zip

# Download and install Drupal
WORKDIR /var/www/html
RUN curl -fSL https://ftp.drupal.org/files/projects/drupal-9.4.8.tar.gz -o drupal.tar.gz \
    && tar -xz --strip-components=1 -f drupal.tar.gz \
    && rm drupal.tar.gz \
    && chown -R www-data:www-data /var/www/html

# Configure Apache
RUN a2enmod rewrite"#,
    );
    templates
});

pub const GENERIC_DOCKERFILE: &str = r#"FROM base-image:version

# Install dependencies
RUN apt-get update && apt-get install -y package1 package2

# Copy application files
COPY . /app
WORKDIR /app

# Expose ports
EXPOSE 80

# Set entrypoint
CMD ["/start.sh"]"#;

pub fn dockerfile_template(repository: &str) -> Option<&'static str> {
    DOCKERFILE_TEMPLATES
        .get(repository.to_lowercase().as_str())
        .copied()
}

pub struct SizeFamily {
    pub heading: &'static str,
    pub tips: [&'static str; 3],
}

static NODE_KEYWORDS: &[&str] = &["node", "nodejs", "javascript", "js"];
static PYTHON_KEYWORDS: &[&str] = &["python", "django", "flask"];
static JAVA_KEYWORDS: &[&str] = &["java", "spring", "maven", "gradle"];

pub static SIZE_FAMILIES: &[(&[&str], SizeFamily)] = &[
    (
        NODE_KEYWORDS,
        SizeFamily {
            heading: "Node.js Specific Recommendations",
            tips: [
                "Use `npm ci` instead of `npm install` for reproducible builds",
                "Add `node_modules` and `npm-debug.log` to .dockerignore",
                "Consider using `npm prune --production` to remove dev dependencies",
            ],
        },
    ),
    (
        PYTHON_KEYWORDS,
        SizeFamily {
            heading: "Python Specific Recommendations",
            tips: [
                "Use virtual environments to isolate dependencies",
                "Add `__pycache__`, `*.pyc`, and `.pytest_cache` to .dockerignore",
                "Consider using pip's `--no-cache-dir` flag to avoid caching packages",
            ],
        },
    ),
    (
        JAVA_KEYWORDS,
        SizeFamily {
            heading: "Java Specific Recommendations",
            tips: [
                "Use JLink to create custom JREs with only required modules",
                "Consider using GraalVM native image for smaller binaries",
                "Add build directories like `target/` or `build/` to .dockerignore",
            ],
        },
    ),
];

pub fn size_family(repository: &str) -> Option<&'static SizeFamily> {
    let key = repository.to_lowercase();
    SIZE_FAMILIES
        .iter()
        .find(|(keywords, _)| keywords.contains(&key.as_str()))
        .map(|(_, family)| family)
}

pub struct ImageFixture {
    pub ports: &'static [&'static str],
    pub env: &'static [&'static str],
}

pub static DEFAULT_FIXTURE: ImageFixture = ImageFixture {
    ports: &["80/tcp"],
    env: &["PATH"],
};

pub static COMPARE_FIXTURES: Lazy<HashMap<&'static str, ImageFixture>> = Lazy::new(|| {
    let mut fixtures = HashMap::new();
    fixtures.insert(
        "nginx",
        ImageFixture {
            ports: &["80/tcp", "443/tcp"],
            env: &["PATH", "NGINX_VERSION", "PKG_RELEASE"],
        },
    );
    fixtures.insert(
        "httpd",
        ImageFixture {
            ports: &["80/tcp"],
            env: &["PATH", "HTTPD_VERSION", "HTTPD_PREFIX"],
        },
    );
    fixtures.insert(
        "mysql",
        ImageFixture {
            ports: &["3306/tcp", "33060/tcp"],
            env: &["PATH", "MYSQL_VERSION", "MYSQL_ROOT_PASSWORD"],
        },
    );
    fixtures.insert(
        "postgres",
        ImageFixture {
            ports: &["5432/tcp"],
            env: &["PATH", "PG_VERSION", "PGDATA"],
        },
    );
    fixtures.insert(
        "redis",
        ImageFixture {
            ports: &["6379/tcp"],
            env: &["PATH", "REDIS_VERSION", "REDIS_DOWNLOAD_URL"],
        },
    );
    fixtures
});

pub fn compare_fixture(repository: &str) -> &'static ImageFixture {
    COMPARE_FIXTURES
        .get(repository.to_lowercase().as_str())
        .unwrap_or(&DEFAULT_FIXTURE)
}
