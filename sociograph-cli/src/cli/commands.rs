//! Command implementations and argument parsing for the sociograph CLI.

use std::collections::BTreeMap;
use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use sociograph_core::{
    AnalysisError, DEFAULT_MAX_DEPTH, Distance, MemberId, MemberReport, Network, NetworkError,
    NetworkSummary, Regression, Statistics, SyntheticError, SyntheticGraphConfig,
    SyntheticNetworkConfig, TraversalOrder, highest_engagement_path, hop_distance_matrix,
    influence_matrix, linear_regression, member_path, reachability_matrix, shortest_distances,
    shortest_path, traverse,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sociograph",
    about = "Explore synthetic social networks and weighted graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a network per requested size and print its statistics.
    Summary(SummaryCommand),
    /// Find a follow path between two members of a generated network.
    Path(PathCommand),
    /// Walk a generated weighted graph from a start node.
    Traverse(TraverseCommand),
}

/// Network sizes swept by `summary` when `--members` is not given.
pub const DEFAULT_SUMMARY_SIZES: [u64; 5] = [10, 50, 100, 500, 1000];

/// Rows and columns kept from each matrix in a [`SummaryReport`].
pub const MATRIX_SAMPLE: usize = 3;

/// Options accepted by the `summary` command.
#[derive(Debug, Args, Clone)]
pub struct SummaryCommand {
    /// Member counts to generate, one network per value.
    #[arg(long = "members", num_args = 1.., default_values_t = DEFAULT_SUMMARY_SIZES)]
    pub sizes: Vec<u64>,

    /// Generation parameters shared by every size.
    #[command(flatten)]
    pub generation: GenerationArgs,
}

impl Default for SummaryCommand {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SUMMARY_SIZES.to_vec(),
            generation: GenerationArgs::default(),
        }
    }
}

/// Options accepted by the `path` command.
#[derive(Debug, Args, Clone)]
pub struct PathCommand {
    /// Identifier of the starting member.
    #[arg(long)]
    pub from: u64,

    /// Identifier of the target member.
    #[arg(long)]
    pub to: u64,

    /// Path search to run.
    #[arg(long, value_enum, default_value_t = PathAlgorithm::Bfs)]
    pub algorithm: PathAlgorithm,

    /// Hop bound for the engagement search.
    #[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Network generation parameters.
    #[command(flatten)]
    pub network: NetworkArgs,
}

/// Options accepted by the `traverse` command.
#[derive(Debug, Args, Clone)]
pub struct TraverseCommand {
    /// Node to start from.
    #[arg(long, default_value_t = 0)]
    pub start: u32,

    /// Visit order, or `dijkstra` for a distance table.
    #[arg(long, value_enum, default_value_t = TraverseOrder::Bfs)]
    pub order: TraverseOrder,

    /// Graph generation parameters.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// A single network to generate.
#[derive(Debug, Args, Clone)]
pub struct NetworkArgs {
    /// Number of members.
    #[arg(long, default_value_t = 10)]
    pub members: u64,

    /// Generation parameters.
    #[command(flatten)]
    pub generation: GenerationArgs,
}

impl Default for NetworkArgs {
    fn default() -> Self {
        Self {
            members: 10,
            generation: GenerationArgs::default(),
        }
    }
}

impl NetworkArgs {
    fn config(&self) -> SyntheticNetworkConfig {
        self.generation.config(self.members)
    }
}

/// Parameters forwarded to [`SyntheticNetworkConfig`], apart from the size.
#[derive(Debug, Args, Clone)]
pub struct GenerationArgs {
    /// Random follow attempts per member.
    #[arg(long, default_value_t = 10)]
    pub followings: u64,

    /// Random like and comment attempts per member.
    #[arg(long, default_value_t = 5)]
    pub interactions: u64,

    /// Largest count of a single like or comment interaction.
    #[arg(long = "max-count", default_value_t = 9)]
    pub max_count: u64,

    /// Seed for the generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl Default for GenerationArgs {
    fn default() -> Self {
        Self {
            followings: 10,
            interactions: 5,
            max_count: 9,
            seed: 0,
        }
    }
}

impl GenerationArgs {
    fn config(&self, members: u64) -> SyntheticNetworkConfig {
        SyntheticNetworkConfig::new()
            .with_members(members)
            .with_followings_per_member(self.followings)
            .with_interactions_per_member(self.interactions)
            .with_max_count(self.max_count)
            .with_seed(self.seed)
    }
}

/// Parameters forwarded to [`SyntheticGraphConfig`].
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Number of nodes, labelled from zero.
    #[arg(long, default_value_t = 16)]
    pub nodes: u32,

    /// Random edge attempts.
    #[arg(long, default_value_t = 32)]
    pub edges: u64,

    /// Largest edge weight.
    #[arg(long = "max-weight", default_value_t = 10)]
    pub max_weight: u32,

    /// Seed for the generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            nodes: 16,
            edges: 32,
            max_weight: 10,
            seed: 0,
        }
    }
}

impl GraphArgs {
    fn config(&self) -> SyntheticGraphConfig {
        SyntheticGraphConfig::new()
            .with_nodes(self.nodes)
            .with_edges(self.edges)
            .with_max_weight(self.max_weight)
            .with_seed(self.seed)
    }
}

/// Path searches offered by the `path` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathAlgorithm {
    /// Breadth-first shortest path.
    Bfs,
    /// Unit-weight Dijkstra.
    Dijkstra,
    /// Highest summed engagement within `--max-depth` hops.
    Engagement,
}

impl PathAlgorithm {
    /// Lower-case label used in output and spans.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::Engagement => "engagement",
        }
    }
}

/// Walks offered by the `traverse` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraverseOrder {
    /// Breadth-first visit order.
    Bfs,
    /// Depth-first visit order.
    Dfs,
    /// Shortest weighted distance to every node.
    Dijkstra,
}

impl TraverseOrder {
    /// Lower-case label used in output and spans.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A network lookup failed, usually an unknown `--from` or `--to`.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// The generator rejected its parameters.
    #[error(transparent)]
    Synthetic(#[from] SyntheticError),
    /// A summary statistic could not be computed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl CliError {
    /// Stable machine-readable code of the underlying failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Network(err) => err.code().as_str(),
            Self::Synthetic(err) => err.code().as_str(),
            Self::Analysis(err) => err.code().as_str(),
        }
    }
}

/// Aggregates printed by the `summary` command.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// Network-wide counters.
    pub summary: NetworkSummary,
    /// Ordered pairs of distinct members joined by a follow path.
    pub reachable_pairs: usize,
    /// Engagement rate across members.
    pub engagement_rate: Option<Statistics>,
    /// Hop distance across reachable pairs of distinct members.
    pub hop_distance: Option<Statistics>,
    /// Engagement received as a function of follower count.
    pub popularity: Regression,
    /// Top-left corner of [`sociograph_core::influence_matrix`].
    pub influence_sample: Vec<Vec<f64>>,
    /// Top-left corner of [`sociograph_core::hop_distance_matrix`].
    pub hop_sample: Vec<Vec<Option<usize>>>,
    /// Top-left corner of [`sociograph_core::reachability_matrix`].
    pub reachability_sample: Vec<Vec<u8>>,
}

/// Result of the `path` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    /// Search that produced the path.
    pub algorithm: PathAlgorithm,
    /// Members along the path; empty when none was found.
    pub path: Vec<MemberId>,
    /// Summed engagement, reported by the engagement search only.
    pub score: Option<u64>,
}

/// Result of the `traverse` command.
#[derive(Debug, Clone, PartialEq)]
pub enum TraversalReport {
    /// Nodes in visit order.
    Visits {
        /// Order that produced the visits.
        order: TraverseOrder,
        /// Visited nodes.
        nodes: Vec<u32>,
    },
    /// Shortest weighted distance to every node.
    Distances(BTreeMap<u32, Distance<u32>>),
}

/// Output of any CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// One [`SummaryReport`] per requested network size.
    Summary(Vec<SummaryReport>),
    /// See [`PathReport`].
    Path(PathReport),
    /// See [`TraversalReport`].
    Traversal(TraversalReport),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation or a lookup fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use sociograph_cli::cli::{Cli, Command, CommandOutput, SummaryCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Summary(SummaryCommand {
///         sizes: vec![10, 20],
///         ..SummaryCommand::default()
///     }),
/// };
/// let CommandOutput::Summary(reports) = run_cli(cli)? else {
///     unreachable!("summary command yields summaries");
/// };
/// assert_eq!(reports.len(), 2);
/// assert_eq!(reports[1].summary.members(), 20);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Summary(command) => {
            span.record("command", field::display("summary"));
            run_summary(&command).map(CommandOutput::Summary)
        }
        Command::Path(command) => {
            span.record("command", field::display("path"));
            run_path(&command).map(CommandOutput::Path)
        }
        Command::Traverse(command) => {
            span.record("command", field::display("traverse"));
            run_traverse(&command).map(CommandOutput::Traversal)
        }
    }
}

#[instrument(
    name = "cli.summary",
    err,
    skip(command),
    fields(sizes = command.sizes.len(), seed = command.generation.seed),
)]
pub(super) fn run_summary(command: &SummaryCommand) -> Result<Vec<SummaryReport>, CliError> {
    command
        .sizes
        .iter()
        .map(|&members| {
            let network = command.generation.config(members).generate_network()?;
            let report = summarise(&network)?;
            info!(
                members = report.summary.members(),
                followings = report.summary.followings(),
                reachable_pairs = report.reachable_pairs,
                "summary completed"
            );
            Ok(report)
        })
        .collect()
}

#[expect(
    clippy::cast_precision_loss,
    reason = "counts are reported as approximate statistics"
)]
pub(super) fn summarise(network: &Network) -> Result<SummaryReport, CliError> {
    let reports: Vec<MemberReport> = network.members().map(MemberReport::from_member).collect();
    let rates: Vec<f64> = reports.iter().map(|report| report.engagement_rate).collect();
    let hop_matrix = hop_distance_matrix(network);
    let hops: Vec<f64> = hop_matrix
        .iter()
        .flatten()
        .flatten()
        .filter(|&&hops| hops > 0)
        .map(|&hops| hops as f64)
        .collect();
    let followers: Vec<f64> = reports.iter().map(|report| report.followed_by as f64).collect();
    let received: Vec<f64> = reports
        .iter()
        .map(|report| report.likes_received.saturating_add(report.comments_received) as f64)
        .collect();

    Ok(SummaryReport {
        summary: NetworkSummary::from_network(network),
        reachable_pairs: hops.len(),
        engagement_rate: Statistics::from_samples(&rates),
        hop_distance: Statistics::from_samples(&hops),
        popularity: linear_regression(&followers, &received)?,
        influence_sample: corner(&influence_matrix(network)),
        reachability_sample: corner(&reachability_matrix(&hop_matrix)),
        hop_sample: corner(&hop_matrix),
    })
}

fn corner<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    matrix
        .iter()
        .take(MATRIX_SAMPLE)
        .map(|row| row.iter().take(MATRIX_SAMPLE).cloned().collect())
        .collect()
}

#[instrument(
    name = "cli.path",
    err,
    skip(command),
    fields(from = command.from, to = command.to, algorithm = field::Empty),
)]
pub(super) fn run_path(command: &PathCommand) -> Result<PathReport, CliError> {
    Span::current().record("algorithm", field::display(command.algorithm.as_str()));
    let network = command.network.config().generate_network()?;
    let (start, end) = (MemberId::new(command.from), MemberId::new(command.to));

    let (path, score) = match command.algorithm {
        PathAlgorithm::Bfs => (shortest_path(&network, start, end)?.unwrap_or_default(), None),
        PathAlgorithm::Dijkstra => (member_path(&network, start, end)?, None),
        PathAlgorithm::Engagement => {
            let (path, score) =
                highest_engagement_path(&network, start, end, command.max_depth)?.into_parts();
            (path, Some(score))
        }
    };
    info!(hops = path.len().saturating_sub(1), found = !path.is_empty(), "path completed");
    Ok(PathReport {
        algorithm: command.algorithm,
        path,
        score,
    })
}

#[instrument(
    name = "cli.traverse",
    err,
    skip(command),
    fields(start = command.start, order = field::Empty),
)]
pub(super) fn run_traverse(command: &TraverseCommand) -> Result<TraversalReport, CliError> {
    Span::current().record("order", field::display(command.order.as_str()));
    let graph = command.graph.config().generate_graph()?;

    let report = match command.order {
        TraverseOrder::Bfs | TraverseOrder::Dfs => {
            let walk = if command.order == TraverseOrder::Bfs {
                TraversalOrder::BreadthFirst
            } else {
                TraversalOrder::DepthFirst
            };
            TraversalReport::Visits {
                order: command.order,
                nodes: traverse(&graph, command.start, walk),
            }
        }
        TraverseOrder::Dijkstra => {
            TraversalReport::Distances(shortest_distances(&graph, command.start))
        }
    };
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "traversal completed");
    Ok(report)
}

/// Renders `output` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use sociograph_cli::cli::{CommandOutput, PathAlgorithm, PathReport, render_output};
/// # use sociograph_core::MemberId;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let output = CommandOutput::Path(PathReport {
///     algorithm: PathAlgorithm::Bfs,
///     path: vec![MemberId::new(1), MemberId::new(4)],
///     score: None,
/// });
/// let mut buffer = Vec::new();
/// render_output(&output, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "algorithm: bfs\npath: 1 -> 4\nhops: 1\n");
/// # Ok(())
/// # }
/// ```
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Summary(reports) => {
            for (index, report) in reports.iter().enumerate() {
                if index > 0 {
                    writeln!(writer)?;
                }
                render_summary(report, &mut writer)?;
            }
            Ok(())
        }
        CommandOutput::Path(report) => render_path(report, &mut writer),
        CommandOutput::Traversal(report) => render_traversal(report, &mut writer),
    }
}

fn render_summary(report: &SummaryReport, mut writer: impl Write) -> io::Result<()> {
    let summary = &report.summary;
    writeln!(writer, "members: {}", summary.members())?;
    writeln!(writer, "followings: {}", summary.followings())?;
    writeln!(writer, "likes: {}", summary.likes())?;
    writeln!(writer, "comments: {}", summary.comments())?;
    writeln!(writer, "engagements: {}", summary.engagements())?;
    writeln!(writer, "reachable pairs: {}", report.reachable_pairs)?;
    write_statistics(&mut writer, "engagement rate", report.engagement_rate.as_ref())?;
    write_statistics(&mut writer, "hop distance", report.hop_distance.as_ref())?;
    writeln!(
        writer,
        "popularity: slope={:.3} r2={:.3}",
        report.popularity.slope, report.popularity.r_squared
    )?;
    write_sample(&mut writer, "influence", &report.influence_sample, |cell| {
        format!("{cell:.1}")
    })?;
    write_sample(&mut writer, "hops", &report.hop_sample, |cell| {
        cell.map_or_else(|| "-".to_owned(), |hops| hops.to_string())
    })?;
    write_sample(&mut writer, "reachability", &report.reachability_sample, ToString::to_string)
}

fn write_sample<T>(
    mut writer: impl Write,
    label: &str,
    rows: &[Vec<T>],
    cell: impl Fn(&T) -> String,
) -> io::Result<()> {
    writeln!(writer, "{label} sample:")?;
    for row in rows {
        let cells: Vec<String> = row.iter().map(&cell).collect();
        writeln!(writer, "  {}", cells.join("\t"))?;
    }
    Ok(())
}

fn write_statistics(
    mut writer: impl Write,
    label: &str,
    stats: Option<&Statistics>,
) -> io::Result<()> {
    match stats {
        Some(stats) => writeln!(
            writer,
            "{label}: n={} mean={:.3} std={:.3} max={:.3}",
            stats.count(),
            stats.mean(),
            stats.std_dev(),
            stats.max()
        ),
        None => writeln!(writer, "{label}: n/a"),
    }
}

fn render_path(report: &PathReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "algorithm: {}", report.algorithm.as_str())?;
    if report.path.is_empty() {
        writeln!(writer, "no path")?;
    } else {
        let hops: Vec<String> = report.path.iter().map(ToString::to_string).collect();
        writeln!(writer, "path: {}", hops.join(" -> "))?;
        writeln!(writer, "hops: {}", report.path.len().saturating_sub(1))?;
    }
    if let Some(score) = report.score {
        writeln!(writer, "score: {score}")?;
    }
    Ok(())
}

fn render_traversal(report: &TraversalReport, mut writer: impl Write) -> io::Result<()> {
    match report {
        TraversalReport::Visits { order, nodes } => {
            writeln!(writer, "order: {}", order.as_str())?;
            for (position, node) in nodes.iter().enumerate() {
                writeln!(writer, "{position}\t{node}")?;
            }
        }
        TraversalReport::Distances(distances) => {
            writeln!(writer, "order: dijkstra")?;
            for (node, distance) in distances {
                match distance.finite() {
                    Some(weight) => writeln!(writer, "{node}\t{weight}")?,
                    None => writeln!(writer, "{node}\tunreachable")?,
                }
            }
        }
    }
    Ok(())
}
