use anyhow::Context;
use clap::{Parser, Subcommand};
use simple_token::{observability, Claims, Config, TokenSigner};
use tracing::info;
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(name = "simple-token", version, about = "Generate and validate signed tokens")]
struct Cli {
    /// Signing secret. Overrides TOKEN_SECRET.
    #[arg(long, global = true)]
    secret: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a token for a subject and print it.
    Generate {
        /// Principal the token is issued to
        #[arg(long)]
        subject: String,

        /// Lifetime in seconds. Defaults to TOKEN_TTL.
        #[arg(long)]
        ttl: Option<i64>,
    },

    /// Validate a token and print its subject and expiry.
    Validate {
        token: String,
    },
}

impl Cli {
    /// Move the `--secret` override into `config`.
    fn apply_secret(&mut self, config: &mut Config) {
        if let Some(secret) = self.secret.take() {
            config.secret = Zeroizing::new(secret);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    cli.apply_secret(&mut config);
    observability::init_tracing(&config);

    let signer = TokenSigner::from_config(&config);

    match cli.cmd {
        Command::Generate { subject, ttl } => {
            let ttl = ttl.unwrap_or_else(|| config.token_ttl_secs());
            let claims = Claims::with_lifetime(subject, ttl)?;
            let token = signer.generate(&claims, None)?;
            info!(subject = %claims.subject(), expires_at = %claims.expires_at(), "Issued token");
            println!("{token}");
        }
        Command::Validate { token } => {
            let claims = signer
                .validate(token.trim())
                .context("Token rejected")?;
            println!("sub: {}", claims.subject());
            println!("exp: {}", claims.expires_at().to_rfc3339());
        }
    }

    Ok(())
}
