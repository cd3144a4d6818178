//! Per-language command table for generated targets

use super::TargetKind;
use crate::stack::{FrameworkId, LanguageId};

/// Description and command lines of one generated target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub description: String,
    pub commands: Vec<String>,
}

impl Recipe {
    fn new(description: &str, commands: &[&str]) -> Self {
        Self {
            description: description.to_string(),
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Stand-in for a kind the language has no command for.
    pub fn placeholder(language: LanguageId, kind: &TargetKind) -> Self {
        let gap = format!(
            "No {} command is known for {} projects",
            kind.target_name(),
            language
        );
        Self {
            commands: vec![format!("@echo \"{}; edit this target.\"", gap)],
            description: format!("{} (placeholder)", gap),
        }
    }
}

/// What a recipe may depend on beyond the language.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeContext<'a> {
    pub framework: Option<&'a FrameworkId>,
    pub has_entry_point: bool,
    /// Java project built with Gradle rather than Maven
    pub gradle: bool,
}

/// Looks up the recipe for a language-specific kind. `ci`, `deploy` and
/// custom kinds are never in the table.
pub fn recipe(language: LanguageId, kind: &TargetKind, ctx: RecipeContext<'_>) -> Option<Recipe> {
    if *kind == TargetKind::Run {
        if let Some(recipe) = framework_run(ctx) {
            return Some(recipe);
        }
    }

    let (description, commands): (&str, &[&str]) = match (language, kind) {
        (LanguageId::Go, TargetKind::Build) if ctx.has_entry_point => (
            "Build the binary",
            &["go build -o bin/$(PROJECT_NAME) ./$(ENTRY_POINT)"],
        ),
        (LanguageId::Go, TargetKind::Build) => {
            ("Build the binary", &["go build -o bin/$(PROJECT_NAME) ."])
        }
        (LanguageId::Go, TargetKind::Clean) => ("Remove build artifacts", &["rm -rf bin/", "go clean"]),
        (LanguageId::Go, TargetKind::Run) => ("Run the binary", &["./bin/$(PROJECT_NAME)"]),
        (LanguageId::Go, TargetKind::Test) => ("Run tests", &["go test ./..."]),
        (LanguageId::Go, TargetKind::Coverage) => (
            "Generate a coverage report",
            &[
                "go test -coverprofile=coverage.out ./...",
                "go tool cover -html=coverage.out -o coverage.html",
            ],
        ),
        (LanguageId::Go, TargetKind::Lint) => ("Run linters", &["golangci-lint run ./..."]),
        (LanguageId::Go, TargetKind::Format) => ("Format sources", &["gofmt -s -w ."]),

        (LanguageId::Python, TargetKind::Build) => {
            ("Install dependencies", &["pip install -r requirements.txt"])
        }
        (LanguageId::Python, TargetKind::Clean) => (
            "Remove caches and build artifacts",
            &[
                "find . -type d -name __pycache__ -prune -exec rm -rf {} +",
                "rm -rf build/ dist/ *.egg-info .pytest_cache .coverage htmlcov/",
            ],
        ),
        (LanguageId::Python, TargetKind::Run) if ctx.has_entry_point => {
            ("Run the application", &["python $(ENTRY_POINT)"])
        }
        (LanguageId::Python, TargetKind::Run) => {
            ("Run the application", &["python -m $(PROJECT_NAME)"])
        }
        (LanguageId::Python, TargetKind::Test) => ("Run tests", &["pytest"]),
        (LanguageId::Python, TargetKind::Coverage) => (
            "Generate a coverage report",
            &["pytest --cov=. --cov-report=term --cov-report=html"],
        ),
        (LanguageId::Python, TargetKind::Lint) => ("Run linters", &["flake8 ."]),
        (LanguageId::Python, TargetKind::Format) => ("Format sources", &["black ."]),

        (LanguageId::JavaScript | LanguageId::TypeScript, TargetKind::Build) => {
            ("Install dependencies and build", &["npm install", "npm run build"])
        }
        (LanguageId::JavaScript | LanguageId::TypeScript, TargetKind::Clean) => {
            ("Remove build artifacts", &["rm -rf dist/ build/ coverage/"])
        }
        (LanguageId::JavaScript, TargetKind::Run) if ctx.has_entry_point => {
            ("Run the application", &["node $(ENTRY_POINT)"])
        }
        (LanguageId::JavaScript | LanguageId::TypeScript, TargetKind::Run) => {
            ("Run the application", &["npm start"])
        }
        (LanguageId::JavaScript | LanguageId::TypeScript, TargetKind::Test) => {
            ("Run tests", &["npm test"])
        }
        (LanguageId::JavaScript | LanguageId::TypeScript, TargetKind::Coverage) => {
            ("Generate a coverage report", &["npm test -- --coverage"])
        }
        (LanguageId::JavaScript | LanguageId::TypeScript, TargetKind::Lint) => {
            ("Run linters", &["npx eslint ."])
        }
        (LanguageId::JavaScript | LanguageId::TypeScript, TargetKind::Format) => {
            ("Format sources", &["npx prettier --write ."])
        }

        (LanguageId::Rust, TargetKind::Build) => ("Build in release mode", &["cargo build --release"]),
        (LanguageId::Rust, TargetKind::Clean) => ("Remove build artifacts", &["cargo clean"]),
        (LanguageId::Rust, TargetKind::Run) => ("Run the binary", &["cargo run --release"]),
        (LanguageId::Rust, TargetKind::Test) => ("Run tests", &["cargo test"]),
        (LanguageId::Rust, TargetKind::Coverage) => {
            ("Generate a coverage report", &["cargo tarpaulin --out Html"])
        }
        (LanguageId::Rust, TargetKind::Lint) => {
            ("Run clippy", &["cargo clippy --all-targets -- -D warnings"])
        }
        (LanguageId::Rust, TargetKind::Format) => ("Format sources", &["cargo fmt --all"]),

        (LanguageId::Java, TargetKind::Build) if ctx.gradle => {
            ("Build the application", &["./gradlew build -x test"])
        }
        (LanguageId::Java, TargetKind::Clean) if ctx.gradle => ("Remove build artifacts", &["./gradlew clean"]),
        (LanguageId::Java, TargetKind::Run) if ctx.gradle => {
            ("Run the packaged jar", &["java -jar build/libs/$(PROJECT_NAME).jar"])
        }
        (LanguageId::Java, TargetKind::Test) if ctx.gradle => ("Run tests", &["./gradlew test"]),
        (LanguageId::Java, TargetKind::Coverage) if ctx.gradle => {
            ("Generate a coverage report", &["./gradlew test jacocoTestReport"])
        }
        (LanguageId::Java, TargetKind::Lint) if ctx.gradle => ("Run all checks", &["./gradlew check -x test"]),

        (LanguageId::Java, TargetKind::Build) => ("Package the application", &["mvn package -DskipTests"]),
        (LanguageId::Java, TargetKind::Clean) => ("Remove build artifacts", &["mvn clean"]),
        (LanguageId::Java, TargetKind::Run) => {
            ("Run the packaged jar", &["java -jar target/$(PROJECT_NAME).jar"])
        }
        (LanguageId::Java, TargetKind::Test) => ("Run tests", &["mvn test"]),
        (LanguageId::Java, TargetKind::Coverage) => {
            ("Generate a coverage report", &["mvn test jacoco:report"])
        }
        (LanguageId::Java, TargetKind::Lint) => ("Run checkstyle", &["mvn checkstyle:check"]),

        (LanguageId::Ruby, TargetKind::Build) => ("Install gems", &["bundle install"]),
        (LanguageId::Ruby, TargetKind::Clean) => {
            ("Remove temporary files", &["rm -rf tmp/ coverage/ log/*.log"])
        }
        (LanguageId::Ruby, TargetKind::Run) if ctx.has_entry_point => {
            ("Run the application", &["bundle exec ruby $(ENTRY_POINT)"])
        }
        (LanguageId::Ruby, TargetKind::Run) => ("Run the application", &["bundle exec rackup"]),
        (LanguageId::Ruby, TargetKind::Test) => ("Run tests", &["bundle exec rspec"]),
        (LanguageId::Ruby, TargetKind::Coverage) => {
            ("Generate a coverage report", &["COVERAGE=true bundle exec rspec"])
        }
        (LanguageId::Ruby, TargetKind::Lint) => ("Run rubocop", &["bundle exec rubocop"]),
        (LanguageId::Ruby, TargetKind::Format) => {
            ("Autocorrect style offenses", &["bundle exec rubocop -a"])
        }

        (LanguageId::Php, TargetKind::Build) => ("Install dependencies", &["composer install"]),
        (LanguageId::Php, TargetKind::Clean) => ("Remove installed dependencies", &["rm -rf vendor/"]),
        (LanguageId::Php, TargetKind::Run) if ctx.has_entry_point => (
            "Start the built-in web server",
            &["php -S localhost:8000 $(ENTRY_POINT)"],
        ),
        (LanguageId::Php, TargetKind::Run) => {
            ("Start the built-in web server", &["php -S localhost:8000"])
        }
        (LanguageId::Php, TargetKind::Test) => ("Run tests", &["vendor/bin/phpunit"]),
        (LanguageId::Php, TargetKind::Coverage) => (
            "Generate a coverage report",
            &["vendor/bin/phpunit --coverage-html coverage"],
        ),
        (LanguageId::Php, TargetKind::Lint) => ("Run static analysis", &["vendor/bin/phpstan analyse"]),
        (LanguageId::Php, TargetKind::Format) => ("Format sources", &["vendor/bin/php-cs-fixer fix"]),

        (LanguageId::Cpp, TargetKind::Build) => (
            "Configure and build with CMake",
            &["cmake -S . -B build", "cmake --build build"],
        ),
        (LanguageId::Cpp, TargetKind::Clean) => ("Remove the build tree", &["rm -rf build/"]),
        (LanguageId::Cpp, TargetKind::Run) => ("Run the binary", &["./build/$(PROJECT_NAME)"]),
        (LanguageId::Cpp, TargetKind::Test) => ("Run tests", &["ctest --test-dir build"]),
        (LanguageId::Cpp, TargetKind::Format) => (
            "Format sources",
            &["find . \\( -name '*.cpp' -o -name '*.hpp' -o -name '*.c' -o -name '*.h' \\) -not -path './build/*' -exec clang-format -i {} +"],
        ),

        _ => return None,
    };

    Some(Recipe::new(description, commands))
}

/// Framework launchers that beat the plain language command for `run`.
fn framework_run(ctx: RecipeContext<'_>) -> Option<Recipe> {
    let (description, commands): (&str, &[&str]) = match ctx.framework? {
        FrameworkId::Django => (
            "Start the Django development server",
            &["python manage.py runserver 0.0.0.0:$(PORT)"],
        ),
        FrameworkId::Flask => ("Start the Flask development server", &["flask run --port $(PORT)"]),
        FrameworkId::Rails => ("Start the Rails server", &["bundle exec rails server -p $(PORT)"]),
        FrameworkId::Laravel => ("Start the Laravel server", &["php artisan serve --port=$(PORT)"]),
        FrameworkId::SpringBoot if ctx.gradle => {
            ("Run with the Spring Boot plugin", &["./gradlew bootRun"])
        }
        FrameworkId::SpringBoot => ("Run with the Spring Boot plugin", &["mvn spring-boot:run"]),
        FrameworkId::NextJs => ("Start the Next.js server", &["npm run start"]),
        _ => return None,
    };
    Some(Recipe::new(description, commands))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RecipeContext<'static> {
        RecipeContext::default()
    }

    #[test]
    fn test_every_language_kind_pair_resolves_or_has_placeholder() {
        let kinds = [
            TargetKind::Build,
            TargetKind::Clean,
            TargetKind::Run,
            TargetKind::Test,
            TargetKind::Coverage,
            TargetKind::Lint,
            TargetKind::Format,
        ];
        for language in LanguageId::all_variants() {
            for kind in &kinds {
                let recipe = recipe(*language, kind, ctx())
                    .unwrap_or_else(|| Recipe::placeholder(*language, kind));
                assert!(!recipe.commands.is_empty(), "{} {}", language, kind);
            }
        }
    }

    #[test]
    fn test_unknown_language_has_no_commands() {
        assert!(recipe(LanguageId::Unknown, &TargetKind::Build, ctx()).is_none());
    }

    #[test]
    fn test_gaps_in_table() {
        assert!(recipe(LanguageId::Java, &TargetKind::Format, ctx()).is_none());
        assert!(recipe(LanguageId::Cpp, &TargetKind::Coverage, ctx()).is_none());
        assert!(recipe(LanguageId::Go, &TargetKind::Ci, ctx()).is_none());
    }

    #[test]
    fn test_entry_point_changes_run() {
        let with_entry = RecipeContext {
            has_entry_point: true,
            ..Default::default()
        };
        let recipe = recipe(LanguageId::Python, &TargetKind::Run, with_entry).unwrap();
        assert_eq!(recipe.commands, vec!["python $(ENTRY_POINT)"]);
    }

    #[test]
    fn test_framework_run_override() {
        let django = FrameworkId::Django;
        let context = RecipeContext {
            framework: Some(&django),
            has_entry_point: true,
            ..Default::default()
        };
        let recipe = recipe(LanguageId::Python, &TargetKind::Run, context).unwrap();
        assert!(recipe.commands[0].starts_with("python manage.py runserver"));
    }

    #[test]
    fn test_gradle_java_recipes() {
        let gradle = RecipeContext {
            gradle: true,
            ..Default::default()
        };
        let build = recipe(LanguageId::Java, &TargetKind::Build, gradle).unwrap();
        assert_eq!(build.commands, vec!["./gradlew build -x test"]);
        let test = recipe(LanguageId::Java, &TargetKind::Test, gradle).unwrap();
        assert_eq!(test.commands, vec!["./gradlew test"]);

        let maven = recipe(LanguageId::Java, &TargetKind::Build, ctx()).unwrap();
        assert_eq!(maven.commands, vec!["mvn package -DskipTests"]);
    }

    #[test]
    fn test_spring_boot_run_follows_build_tool() {
        let spring = FrameworkId::SpringBoot;
        let gradle = RecipeContext {
            framework: Some(&spring),
            gradle: true,
            ..Default::default()
        };
        let run = recipe(LanguageId::Java, &TargetKind::Run, gradle).unwrap();
        assert_eq!(run.commands, vec!["./gradlew bootRun"]);

        let maven = RecipeContext {
            framework: Some(&spring),
            ..Default::default()
        };
        let run = recipe(LanguageId::Java, &TargetKind::Run, maven).unwrap();
        assert_eq!(run.commands, vec!["mvn spring-boot:run"]);
    }

    #[test]
    fn test_placeholder_text() {
        let recipe = Recipe::placeholder(LanguageId::Java, &TargetKind::Format);
        assert_eq!(
            recipe.description,
            "No format command is known for java projects (placeholder)"
        );
        assert!(recipe.commands[0].starts_with("@echo"));
    }
}
