// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(true)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
    };
}

/// Simply initialize the tracing system with the provided [`TracingConfig`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber has
/// already been set.
pub fn init(tracing_config: TracingConfig) -> miette::Result<()> {
    if let Some(layers) = try_create_layers(tracing_config)? {
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()?;
    }
    Ok(())
}

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, by calling `init` on the returned layers.
///
/// For example, once you have the layers, you can run the following:
/// `try_create_layers(..)?.map(|layers| tracing_subscriber::registry().with(layers).init());`
///
/// Returns [None] for [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();

    let (maybe_display, maybe_file) = match tracing_config.writer_config {
        WriterConfig::None => return Ok(None),
        WriterConfig::Display(display) => (Some(display), None),
        WriterConfig::File(file) => (None, Some(file)),
        WriterConfig::DisplayAndFile(display, file) => (Some(display), Some(file)),
    };

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add
    // more layers, like OpenTelemetry, which don't have a level filter.
    return_it.push(Box::new(level_filter));

    if let Some(display) = maybe_display {
        return_it.push(create_display_layer(level_filter, display));
    }

    if let Some(file) = maybe_file {
        return_it.push(try_create_file_layer(level_filter, &file)?);
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer. This is
/// useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    preferred_display: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    match preferred_display {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
        DisplayPreference::LogHandle(log_handle) => Box::new(
            fmt_layer
                .with_writer(log_handle)
                .with_filter(level_filter),
        ),
    }
}

/// Same as [`create_display_layer()`], but for a log file. Colors are turned off.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    tracing_log_file_path: &str,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file = rolling_file_appender_impl::try_create(tracing_log_file_path)?;
    Ok(Box::new(
        create_fmt!()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(level_filter),
    ))
}
