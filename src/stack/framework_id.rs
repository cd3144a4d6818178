use serde::{Deserialize, Serialize};
use std::fmt;

crate::define_id_enum_with_display! {
    /// Framework identifier; `Custom` covers names typed by the user or read
    /// from a configuration file.
    FrameworkId {
        Gin => "gin" : "Gin",
        Echo => "echo" : "Echo",
        Fiber => "fiber" : "Fiber",
        Gorm => "gorm" : "GORM",
        Cobra => "cobra" : "Cobra",
        NextJs => "nextjs" : "Next.js" | "Next",
        React => "react" : "React",
        Vue => "vue" : "Vue",
        Angular => "angular" : "Angular",
        Express => "express" : "Express",
        Fastify => "fastify" : "Fastify",
        NestJs => "nestjs" : "NestJS",
        Prisma => "prisma" : "Prisma",
        Django => "django" : "Django",
        Flask => "flask" : "Flask",
        FastApi => "fastapi" : "FastAPI",
        SqlAlchemy => "sqlalchemy" : "SQLAlchemy",
        Actix => "actix" : "Actix" | "Actix Web",
        Rocket => "rocket" : "Rocket",
        Axum => "axum" : "Axum",
        Diesel => "diesel" : "Diesel",
        Clap => "clap" : "Clap",
        SpringBoot => "spring-boot" : "Spring Boot",
        Quarkus => "quarkus" : "Quarkus",
        Rails => "rails" : "Rails",
        Sinatra => "sinatra" : "Sinatra",
        Laravel => "laravel" : "Laravel",
        Symfony => "symfony" : "Symfony",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkCategory {
    Web,
    Frontend,
    Orm,
    Cli,
}

impl fmt::Display for FrameworkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrameworkCategory::Web => "web",
            FrameworkCategory::Frontend => "frontend",
            FrameworkCategory::Orm => "orm",
            FrameworkCategory::Cli => "cli",
        };
        write!(f, "{}", name)
    }
}

impl FrameworkId {
    /// Category and default port of a known framework. Custom frameworks are
    /// treated as web frameworks without a port.
    pub fn profile(&self) -> (FrameworkCategory, Option<u16>) {
        use FrameworkCategory::*;

        match self {
            FrameworkId::Gin => (Web, Some(3000)),
            FrameworkId::Echo => (Web, Some(8080)),
            FrameworkId::Fiber => (Web, Some(3000)),
            FrameworkId::Gorm => (Orm, None),
            FrameworkId::Cobra => (Cli, None),
            FrameworkId::NextJs => (Web, Some(3000)),
            FrameworkId::React => (Frontend, Some(3000)),
            FrameworkId::Vue => (Frontend, Some(5173)),
            FrameworkId::Angular => (Frontend, Some(4200)),
            FrameworkId::Express => (Web, Some(3000)),
            FrameworkId::Fastify => (Web, Some(3000)),
            FrameworkId::NestJs => (Web, Some(3000)),
            FrameworkId::Prisma => (Orm, None),
            FrameworkId::Django => (Web, Some(8000)),
            FrameworkId::Flask => (Web, Some(5000)),
            FrameworkId::FastApi => (Web, Some(8000)),
            FrameworkId::SqlAlchemy => (Orm, None),
            FrameworkId::Actix => (Web, Some(8000)),
            FrameworkId::Rocket => (Web, Some(8000)),
            FrameworkId::Axum => (Web, Some(8000)),
            FrameworkId::Diesel => (Orm, None),
            FrameworkId::Clap => (Cli, None),
            FrameworkId::SpringBoot => (Web, Some(8080)),
            FrameworkId::Quarkus => (Web, Some(8080)),
            FrameworkId::Rails => (Web, Some(3000)),
            FrameworkId::Sinatra => (Web, Some(4567)),
            FrameworkId::Laravel => (Web, Some(8000)),
            FrameworkId::Symfony => (Web, Some(8000)),
            FrameworkId::Custom(_) => (Web, None),
        }
    }
}

/// A detected framework. Identity is the framework id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    #[serde(rename = "name")]
    pub id: FrameworkId,
    pub category: FrameworkCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_port: Option<u16>,
}

impl Framework {
    pub fn new(id: FrameworkId) -> Self {
        let (category, default_port) = id.profile();
        Self {
            id,
            category,
            default_port,
        }
    }

    pub fn name(&self) -> String {
        self.id.name()
    }
}
