//! Command-line interface and conversion orchestration

use crate::analysis::PixelClassifier;
use crate::io::configuration::{
    Config, IMAGE_EXTENSIONS, SCENARIO_EXTENSION,
};
use crate::io::document::{export_document, load_scenario_2d};
use crate::io::error::{Result, invalid_configuration};
use crate::io::image::PixelRaster;
use crate::io::progress::ProgressManager;
use crate::math::RandomSequence;
use crate::model::ScenarioDocument;
use crate::pipeline::builder::{self, Grid2d};
use crate::pipeline::{assemble, extrude, rescale, synthesis};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line arguments for the conversion tool
#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(
    author,
    version,
    about = "Convert images and 2D CO2 scenarios into their 2D or 3D counterparts"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Dimensions of the output scenario (format: HOR VERT)
    #[arg(short, long, num_args = 2, value_names = ["HOR", "VERT"])]
    pub dimensions: Option<Vec<u32>>,

    /// Show per-stage progress bars
    #[arg(short, long)]
    pub progress: bool,

    /// Show per-pixel image classification diagnostics
    #[arg(short, long)]
    pub image_messages: bool,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Requested output resolution, when both components were given
    pub fn requested_dimensions(&self) -> Option<(u32, u32)> {
        let dimensions = self.dimensions.as_ref()?;
        Some((
            dimensions.first().copied()?,
            dimensions.get(1).copied()?,
        ))
    }
}

/// How the input file is to be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    /// Floor-plan image, converted at its native resolution
    Image,
    /// Existing 2D scenario document, extruded to 3D
    Scenario2d,
}

/// Determine the conversion kind from the input path's extension
///
/// # Errors
///
/// Returns an error for a missing extension or one that is neither a
/// supported image format nor a scenario document.
pub fn conversion_kind(input: &Path) -> Result<ConversionKind> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| {
            invalid_configuration(&format!(
                "input file '{}' has no extension",
                input.display()
            ))
        })?;

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(ConversionKind::Image)
    } else if extension == SCENARIO_EXTENSION {
        Ok(ConversionKind::Scenario2d)
    } else {
        Err(invalid_configuration(&format!(
            "unsupported input extension '{extension}'"
        )))
    }
}

/// Runs one conversion from configuration to exported document
pub struct ConversionRunner {
    cli: Cli,
    progress: ProgressManager,
}

impl ConversionRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        let progress = ProgressManager::new(cli.progress && !cli.quiet);
        Self { cli, progress }
    }

    /// Run the conversion and export the result
    ///
    /// # Errors
    ///
    /// Returns an error on any configuration, input-asset, rescale, or
    /// export failure; all failures abort the run.
    // Completion notice goes to stderr so piped output stays clean
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self) -> Result<()> {
        let config = Config::from_path(&self.cli.config)?;
        let document = self.convert(&config)?;
        export_document(&document, &config.files.output)?;
        if !self.cli.quiet {
            eprintln!(
                "Wrote {} cells to '{}'",
                document.cells.len(),
                config.files.output.display()
            );
        }
        Ok(())
    }

    /// Produce the output document without exporting it
    ///
    /// # Errors
    ///
    /// Returns an error on any configuration, input-asset, or rescale
    /// failure.
    pub fn convert(&self, config: &Config) -> Result<ScenarioDocument> {
        match conversion_kind(&config.files.input)? {
            ConversionKind::Image => self.convert_image(config),
            ConversionKind::Scenario2d => self.convert_scenario(config),
        }
    }

    fn convert_image(&self, config: &Config) -> Result<ScenarioDocument> {
        let raster = PixelRaster::from_path(&config.files.input)?;
        let classifier = PixelClassifier::new(&config.image, self.cli.image_messages)?;
        let mut counters = RandomSequence::new(
            config.model.counter.seed,
            config.model.counter.minimum,
            config.model.counter.maximum,
        );

        let bar = self.progress.stage(
            "Classifying pixels",
            u64::from(raster.width()) * u64::from(raster.length()),
        );
        let mut grid = builder::from_image(&raster, &classifier, &mut counters, &bar);
        self.progress.finish(&bar);

        // A differing requested resolution triggers the downscale remap
        if let Some(target) = self.cli.requested_dimensions() {
            if target != (grid.width, grid.length) {
                grid = Grid2d {
                    width: target.0,
                    length: target.1,
                    cells: rescale::rescale(grid.cells, (grid.width, grid.length), target)?,
                };
            }
        }

        Ok(self.finish_model(config, grid))
    }

    fn convert_scenario(&self, config: &Config) -> Result<ScenarioDocument> {
        let document = load_scenario_2d(&config.files.input)?;
        let grid = builder::from_scenario(document)?;
        Ok(self.finish_model(config, grid))
    }

    /// Extrude and cap the model when its height calls for it, then assemble
    fn finish_model(&self, config: &Config, grid: Grid2d) -> ScenarioDocument {
        let Grid2d {
            width,
            length,
            mut cells,
        } = grid;

        if config.model.height > 1 {
            let bar = self.progress.stage("Extending cells", cells.len() as u64);
            cells = extrude::extrude(&cells, &config.model, &bar);
            self.progress.finish(&bar);

            let bar = self.progress.stage(
                "Adding floor and ceiling",
                u64::from(width) * u64::from(length),
            );
            cells = synthesis::add_floor_ceiling(
                cells,
                width,
                length,
                config.model.height,
                &bar,
            );
            self.progress.finish(&bar);
        }

        assemble::assemble(width, length, &config.model, cells)
    }
}
