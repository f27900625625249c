//! Chart rendering.
//!
//! The engine only assembles [`Chart`] values; turning them into images is
//! delegated to a [`ChartRenderer`]. `GnuplotRenderer` writes a script with
//! inline data and runs `gnuplot` on it. `JsonRenderer` writes the dataset
//! for plotting elsewhere.

use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

use allocbench_core::constants;
use allocbench_core::errors::ChartError;
use allocbench_core::{Benchmark, SweepConfig};

use crate::assemble::Series;

/// A finished dataset plus presentation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Output file stem, e.g. `alloc_free`.
    pub name: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// X value of each point; shared by every series.
    pub x: Vec<u32>,
    pub series: Vec<Series>,
}

impl Chart {
    /// Comparison chart of a thread-sweep benchmark.
    pub fn thread_sweep(benchmark: Benchmark, config: &SweepConfig, series: Vec<Series>) -> Self {
        Self {
            name: benchmark.name().to_string(),
            title: benchmark.title().to_string(),
            x_label: constants::THREAD_SWEEP_X_LABEL.to_string(),
            y_label: constants::THREAD_SWEEP_Y_LABEL.to_string(),
            x: config.threads().collect(),
            series,
        }
    }

    /// Single-series recovery chart.
    pub fn recovery(max_iterations: u32, values: Vec<f64>) -> Self {
        let benchmark = Benchmark::Recovery;
        Self {
            name: benchmark.name().to_string(),
            title: benchmark.title().to_string(),
            x_label: constants::RECOVERY_X_LABEL.to_string(),
            y_label: constants::RECOVERY_Y_LABEL.to_string(),
            x: (1..=max_iterations).collect(),
            series: vec![Series::new("nvm_malloc", values)],
        }
    }

    /// `(x, y)` pairs of a series, truncated to the shorter side.
    pub fn points<'a>(&'a self, series: &'a Series) -> impl Iterator<Item = (u32, f64)> + 'a {
        self.x.iter().copied().zip(series.values.iter().copied())
    }

    fn has_data(&self) -> bool {
        self.series.iter().any(|s| self.points(s).next().is_some())
    }
}

/// Turns a chart into an artifact on disk.
pub trait ChartRenderer {
    /// Returns the path of the written artifact.
    fn render(&self, chart: &Chart) -> Result<PathBuf, ChartError>;
}

/// Renders PDFs through an external `gnuplot`.
#[derive(Debug, Clone)]
pub struct GnuplotRenderer {
    plots_dir: PathBuf,
    program: String,
}

impl GnuplotRenderer {
    pub fn new(plots_dir: impl Into<PathBuf>) -> Self {
        Self {
            plots_dir: plots_dir.into(),
            program: "gnuplot".to_string(),
        }
    }

    /// Use a different gnuplot executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// The gnuplot script drawing `chart` into `output`.
    pub fn script(chart: &Chart, output: &Path) -> String {
        let mut script = String::new();
        let _ = writeln!(
            script,
            "set terminal pdfcairo noenhanced size 5.31in,3.54in font \"Latin Modern Roman,11\""
        );
        let _ = writeln!(script, "set output '{}'", single_quoted(&output.display().to_string()));
        let _ = writeln!(script, "set title \"{}\"", double_quoted(&chart.title));
        let _ = writeln!(script, "set xlabel \"{}\"", double_quoted(&chart.x_label));
        let _ = writeln!(script, "set ylabel \"{}\"", double_quoted(&chart.y_label));
        if let (Some(first), Some(last)) = (chart.x.first(), chart.x.last()) {
            let _ = writeln!(script, "set xrange [{first}:{last}]");
        }
        let _ = writeln!(script, "set key top left font \",10\"");

        let mut plots = Vec::new();
        for (index, series) in chart.series.iter().enumerate() {
            if chart.points(series).next().is_none() {
                continue;
            }
            let _ = writeln!(script, "$series{index} << EOD");
            for (x, y) in chart.points(series) {
                let _ = writeln!(script, "{x} {y}");
            }
            let _ = writeln!(script, "EOD");
            plots.push(format!(
                "$series{index} using 1:2 with lines title \"{}\"",
                double_quoted(&series.label)
            ));
        }
        let _ = writeln!(script, "plot {}", plots.join(", \\\n     "));
        script
    }
}

impl ChartRenderer for GnuplotRenderer {
    fn render(&self, chart: &Chart) -> Result<PathBuf, ChartError> {
        if !chart.has_data() {
            return Err(ChartError::NoData {
                name: chart.name.clone(),
            });
        }
        create_dir(&self.plots_dir)?;

        let output = self.plots_dir.join(format!("{}.pdf", chart.name));
        let script_path = self.plots_dir.join(format!("{}.gnuplot", chart.name));
        fs::write(&script_path, Self::script(chart, &output)).map_err(|source| ChartError::Io {
            path: script_path.clone(),
            source,
        })?;

        let result = Command::new(&self.program)
            .arg(&script_path)
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ChartError::RendererMissing {
                    program: self.program.clone(),
                    source,
                },
                _ => ChartError::Io {
                    path: script_path.clone(),
                    source,
                },
            })?;
        if !result.status.success() {
            return Err(ChartError::RendererFailed {
                program: self.program.clone(),
                script: script_path,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        tracing::info!(chart = %chart.name, path = %output.display(), "chart written");
        Ok(output)
    }
}

/// Writes the chart as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    plots_dir: PathBuf,
}

impl JsonRenderer {
    pub fn new(plots_dir: impl Into<PathBuf>) -> Self {
        Self {
            plots_dir: plots_dir.into(),
        }
    }
}

impl ChartRenderer for JsonRenderer {
    fn render(&self, chart: &Chart) -> Result<PathBuf, ChartError> {
        create_dir(&self.plots_dir)?;
        let output = self.plots_dir.join(format!("{}.json", chart.name));
        let body = serde_json::to_string_pretty(chart)
            .map_err(|e| ChartError::Serialization(e.to_string()))?;
        fs::write(&output, body).map_err(|source| ChartError::Io {
            path: output.clone(),
            source,
        })?;

        tracing::info!(chart = %chart.name, path = %output.display(), "dataset written");
        Ok(output)
    }
}

fn create_dir(dir: &Path) -> Result<(), ChartError> {
    fs::create_dir_all(dir).map_err(|source| ChartError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn double_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn single_quoted(text: &str) -> String {
    text.replace('\'', "''")
}
