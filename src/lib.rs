pub mod args;
pub mod io;
pub mod geo_2d;
pub mod koch;
pub mod shapes;
pub mod request;
mod crate_errors;

use log::info;
use strum::IntoEnumIterator;

pub use crate_errors::{
    KochflakeError,
    KochflakeResult,
};

/// Generate target.
/// Contains the resolved request and config, and where the drawing goes.
pub struct Target {
    pub request: request::Request,
    pub cfg: request::RenderCfg,
    pub output_path: Option<String>,
    pub format: args::Format,
}

/// Dispatch the parsed command line to the matching process.
/// Returns a `KochflakeResult` with `()` or an `Err`.
pub fn handle_cli_args(cli_args: args::KochflakeCli) -> KochflakeResult<()> {
    match cli_args.sub_command {
        args::RunCommand::Generate(generate_args) => run_process(build_target(generate_args)?),
        args::RunCommand::Example(example_args) => example_config(example_args),
        args::RunCommand::List => list_shapes(),
    }
}

/// [Stage 1.]
/// Build the generate target from the command line arguments.
/// Loads the config file if one is given, and folds `--type`, `--query` and `--order` into one request.
/// Returns a `ProcResult` with the `Target` or an `Err`.
pub fn build_target(generate_args: args::GenerateArgs) -> args::ProcResult<Target> {
    let cfg = match generate_args.cfg_path.as_ref() {
        Some(cfg_path) => {
            info!("Loading render config file: {}...", cfg_path);
            io::read_cfg_file::<request::RenderCfg>(cfg_path)?
        },
        None => request::RenderCfg::default(),
    };
    cfg.validate()?;

    let mut request = match generate_args.query.as_ref() {
        Some(query) => request::Request::from_query(query)?,
        None => request::Request::default(),
    };
    if generate_args.shape_type.is_some() {
        request.shape_type = generate_args.shape_type;
    }
    if generate_args.order.is_some() {
        request.order = generate_args.order;
    }

    if let Some(output_path) = generate_args.output_path.as_ref() {
        io::format_from_path(output_path)?;
        if generate_args.cfg_path.as_ref() == Some(output_path) {
            args::err_str("Output path would overwrite the config file")?;
        }
    }

    Ok(Target{
        request,
        cfg,
        output_path: generate_args.output_path,
        format: generate_args.format,
    })
}

/// [Stage 2.]
/// Generate the drawing for the target and write it out.
/// Returns a `KochflakeResult` with `()` or an `Err`.
pub fn run_process(target: Target) -> KochflakeResult<()> {
    let drawing = request::handle_request(&target.request, &target.cfg)?;

    match target.output_path.as_ref() {
        Some(output_path) => {
            info!("Saving drawing to {}...", output_path);
            io::write_data_file(output_path, &drawing)?;
        },
        None => println!("{}", io::to_format_string(&drawing, target.format)?),
    }
    Ok(())
}

/// Print the default render config, as a starting point for a config file.
/// Returns a `KochflakeResult` with `()` or an `Err`.
pub fn example_config(example_args: args::ExampleArgs) -> KochflakeResult<()> {
    let cfg = request::RenderCfg::default();
    println!("{}", io::to_format_string(&cfg, example_args.format)?);
    Ok(())
}

/// Print the shape types that can be requested.
pub fn list_shapes() -> KochflakeResult<()> {
    for kind in shapes::ShapeKind::iter() {
        println!("{}", kind);
    }
    Ok(())
}
