//! PhonePro CLI
//!
//! Terminal client for the PhonePro API:
//! - Sign up, log in and out
//! - Search phone models and show their details
//! - Request a recommendation

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phonepro::api::HttpBackend;
use phonepro::auth::{self, AuthOutcome, LoginForm, SignupForm};
use phonepro::catalog::{filter_models, record_rows, DetailState, OptionsState, PhoneLookup};
use phonepro::config::{generate_default_config, Config, LoggingConfig};
use phonepro::recommend::{self, RecommendState, RecommendationForm, ResultView, Slider};
use phonepro::{Backend, FileStore, Message, Session, View};

#[derive(Parser)]
#[command(name = "phonepro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find the phone that fits your needs")]
#[command(long_about = "PhonePro recommends the best phone for your needs.\nSearch any model to view its details, then tune the options to get a personalized suggestion.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Signup {
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Password confirmation
        #[arg(long)]
        confirm: String,
    },

    /// Log in and remember the username
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the signed-in username
    Logout,

    /// Show the signed-in username
    Whoami,

    /// List phone models
    Models {
        /// Case-insensitive substring filter
        #[arg(short, long, default_value = "")]
        filter: String,
    },

    /// Show the details of one phone model
    Phone {
        /// Exact model name
        model: String,
    },

    /// Request a phone recommendation
    Recommend(RecommendArgs),

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Desired attributes; unset selections default to the first catalog entry
#[derive(Args)]
pub struct RecommendArgs {
    /// Price in INR
    #[arg(long)]
    price: Option<u32>,
    #[arg(long)]
    brand: Option<String>,
    /// Ask for a phone without 5G
    #[arg(long)]
    no_5g: bool,
    #[arg(long)]
    processor: Option<String>,
    /// Primary rear camera in MP
    #[arg(long)]
    camera: Option<u32>,
    /// Fast charging in W
    #[arg(long)]
    charging: Option<u32>,
    /// Battery capacity in mAh
    #[arg(long)]
    battery: Option<u32>,
    /// RAM in GB
    #[arg(long)]
    ram: Option<u32>,
    /// Internal memory in GB
    #[arg(long)]
    storage: Option<u32>,
    /// Refresh rate in Hz
    #[arg(long)]
    refresh: Option<u32>,
    #[arg(long)]
    os: Option<String>,
}

impl RecommendArgs {
    fn apply(&self, form: &mut RecommendationForm) {
        let sliders = [
            (Slider::Price, self.price),
            (Slider::RearCamera, self.camera),
            (Slider::Charging, self.charging),
            (Slider::Battery, self.battery),
            (Slider::Ram, self.ram),
            (Slider::Storage, self.storage),
            (Slider::RefreshRate, self.refresh),
        ];
        for (slider, value) in sliders {
            if let Some(value) = value {
                form.set(slider, value);
            }
        }

        if let Some(brand) = &self.brand {
            form.brand = brand.clone();
        }
        if let Some(processor) = &self.processor {
            form.processor = processor.clone();
        }
        if let Some(os) = &self.os {
            form.os = os.clone();
        }
        form.support_5g = !self.no_5g;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_default();
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    init_logging(&config.logging);

    let mut session = Session::restore(FileStore::new(config.session.resolved_dir()));
    let backend = HttpBackend::new(&config.api)?;

    match cli.command {
        Commands::Signup {
            username,
            email,
            password,
            confirm,
        } => {
            let form = SignupForm {
                username,
                email,
                password,
                confirm,
            };
            match auth::signup(&backend, &form).await {
                AuthOutcome::SignedUp(message) => println!("{}", message),
                AuthOutcome::Failed(message) => fail(&message),
                AuthOutcome::SignedIn { .. } => {}
            }
        }

        Commands::Login { username, password } => {
            let form = LoginForm { username, password };
            let outcome = auth::login(&backend, session.store(), &form).await;
            match outcome {
                AuthOutcome::SignedIn { username } => {
                    if let Err(e) = session.authenticated(&username) {
                        tracing::warn!(error = %e, "Failed to persist session");
                    }
                    println!("Signed in as {}", username);
                }
                AuthOutcome::Failed(message) => fail(&message),
                AuthOutcome::SignedUp(_) => {}
            }
        }

        Commands::Logout => {
            session.logout()?;
            println!("Signed out");
        }

        Commands::Whoami => match session.view() {
            View::Application { username } => println!("Signed in as {}", username),
            View::Auth => println!("Not signed in"),
        },

        Commands::Models { filter } => {
            let options = OptionsState::from_result(backend.options().await);
            if let Some(status) = options.status_text() {
                fail(&Message::error(status));
            }
            let catalog = options.catalog();
            for model in filter_models(&catalog.phone_models, &filter) {
                println!("{}", model);
            }
        }

        Commands::Phone { model } => {
            let mut lookup = PhoneLookup::new();
            match lookup.fetch(&backend, &model).await {
                DetailState::Loaded(record) => print_rows(&record_rows(&record)),
                DetailState::Failed => fail(&Message::error("Failed to load phone details.")),
                state => println!("{}", state.status_text().unwrap_or_default()),
            }
        }

        Commands::Recommend(args) => {
            let username = match session.view() {
                View::Application { username } => username.to_string(),
                View::Auth => fail(&Message::error(
                    "Not signed in. Run `phonepro login` first.",
                )),
            };
            tracing::debug!(username = %username, "Preparing recommendation");

            let options = OptionsState::from_result(backend.options().await);
            if let Some(status) = options.status_text() {
                eprintln!("{}", status);
            }

            let mut form = RecommendationForm::default();
            args.apply(&mut form);
            form.apply_defaults(&options.catalog());

            let mut state = RecommendState::default();
            state.begin();
            state.finish(recommend::submit(&backend, &form).await);

            if let Some(message) = &state.message {
                if message.is_error() {
                    fail(message);
                }
                println!("{}", message);
            }
            if let Some(view) = state.view() {
                print_result(&view);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("phonepro={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn fail(message: &Message) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

fn print_rows(rows: &[(String, String)]) {
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in rows {
        println!("  {:<width$}  {}", key, value, width = width);
    }
}

fn print_result(view: &ResultView) {
    if let Some(model) = &view.suggested_model {
        println!("Suggested Model: {}", model);
    }
    if let Some(rows) = &view.details {
        print_rows(rows);
    }
    if let Some(raw) = &view.raw {
        println!("{}", raw);
    }
}
