#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use action_tools_core::{
    lookup_usage_with_limit, Error, GitHubClient, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES,
};
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "action-tools", version, about = "GitHub Actions tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Search GitHub for repositories that reference a reusable workflow or action
    ///
    /// TARGET is a reference as it would appear in a job or step's `uses`
    /// directive.
    #[command(after_help = "\
Example Usage:
  action-tools usage \"my-org/my-repo/.github/workflows/build.yml\"
  action-tools usage \"my-org/my-action/action-dir\"
  action-tools usage \"my-org/my-action@v1.2.3\"

Example Output:
  some-org/some-repo
  some-org/another-repo")]
    Usage(UsageArgs),
}

#[derive(clap::Args)]
struct UsageArgs {
    /// Action or workflow reference, e.g. org/repo/path@v1
    target: String,

    /// GitHub token for authentication
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Maximum number of search result pages to fetch
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: usize,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Usage(args) => {
            run_usage(args, &mut std::io::stdout().lock(), &mut std::io::stderr())
        }
    };
    std::process::exit(code);
}

/// Log to stderr so stdout stays one repository per line
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Filter empty string from Option (env vars may produce "" for empty values)
fn clean_opt(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Run the lookup, writing repositories to `out` and failures to `err`.
/// Returns the process exit code.
fn run_usage(args: UsageArgs, out: &mut impl Write, err: &mut impl Write) -> i32 {
    let Some(token) = clean_opt(&args.token) else {
        let _ = writeln!(err, "Error: a GitHub token is required (--token or GITHUB_TOKEN)");
        return 1;
    };

    let client = match GitHubClient::new(token, args.api_url.as_str()) {
        Ok(client) => client,
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            return 1;
        }
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build();
    let rt = match rt {
        Ok(rt) => rt,
        Err(e) => {
            let _ = writeln!(err, "Error: failed to create runtime: {e}");
            return 1;
        }
    };

    let result = rt.block_on(lookup_usage_with_limit(
        &args.target,
        &client,
        args.max_pages,
    ));

    match result {
        Ok(repos) => {
            for repo in &repos {
                if writeln!(out, "{repo}").is_err() {
                    return 1;
                }
            }
            0
        }
        Err(e @ Error::NotFound(_)) => {
            let _ = writeln!(err, "{e}");
            1
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            1
        }
    }
}
