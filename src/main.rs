use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};
use log::info;

use mascot_infile::io::{ExtraColumnPolicy, FloatPrecision, MGFReaderOptions, TitleMode};
use mascot_infile::{MGFReader, MascotInfileWriter, SearchParameters, Spectrum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum ExtraColumnArg {
    /// Drop the third column of peak lines
    #[default]
    Ignore,
    /// Fail on peak lines with a third column
    Reject,
    /// Keep the third column as the peak annotation
    Retain,
}

/// Convert an MGF peak list into a Mascot MS/MS ion search submission
#[derive(Parser, Debug)]
#[command(name = "mascot-infile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The MGF file to read spectra from
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the submission, `-` for STDOUT
    #[arg(short, long, default_value = "-")]
    output: String,

    /// The search title, sent as the `COM` field
    #[arg(short, long, default_value = "")]
    title: String,

    /// Load search parameters from a JSON file before applying the options below
    #[cfg(feature = "serde")]
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// The sequence database
    #[arg(long)]
    db: Option<String>,

    /// The cleavage enzyme
    #[arg(long)]
    enzyme: Option<String>,

    #[arg(long)]
    taxonomy: Option<String>,

    #[arg(long)]
    instrument: Option<String>,

    #[arg(long)]
    missed_cleavages: Option<u32>,

    /// Precursor mass tolerance in Daltons
    #[arg(long)]
    precursor_tolerance: Option<f64>,

    /// Fragment mass tolerance in Daltons
    #[arg(long)]
    fragment_tolerance: Option<f64>,

    /// Allowed precursor charges, e.g. `--charges 2,3,4`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    charges: Vec<i32>,

    /// A fixed modification, may be repeated
    #[arg(long = "fixed-mod")]
    fixed_mods: Vec<String>,

    /// A variable modification, may be repeated
    #[arg(long = "variable-mod")]
    variable_mods: Vec<String>,

    /// Use this multipart boundary instead of a random one
    #[arg(long)]
    boundary: Option<String>,

    /// Significant digits for numbers, 0 for the shortest exact representation
    #[arg(long)]
    precision: Option<usize>,

    /// How to treat a third column on peak lines
    #[arg(long, default_value = "ignore", value_enum)]
    extra_column: ExtraColumnArg,

    /// Keep everything after the first `=` of a `TITLE` line
    #[arg(long)]
    full_titles: bool,
}

impl Cli {
    #[cfg(feature = "serde")]
    fn base_parameters(&self) -> io::Result<SearchParameters> {
        match &self.params {
            Some(path) => {
                let reader = io::BufReader::new(fs::File::open(path)?);
                serde_json::from_reader(reader)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            }
            None => Ok(SearchParameters::default()),
        }
    }

    #[cfg(not(feature = "serde"))]
    fn base_parameters(&self) -> io::Result<SearchParameters> {
        Ok(SearchParameters::default())
    }

    fn search_parameters(&self) -> io::Result<SearchParameters> {
        let mut builder = self.base_parameters()?.to_builder();
        if let Some(db) = &self.db {
            builder = builder.database(db);
        }
        if let Some(enzyme) = &self.enzyme {
            builder = builder.cleavage(enzyme);
        }
        if let Some(taxonomy) = &self.taxonomy {
            builder = builder.taxonomy(taxonomy);
        }
        if let Some(instrument) = &self.instrument {
            builder = builder.instrument(instrument);
        }
        if let Some(missed_cleavages) = self.missed_cleavages {
            builder = builder.missed_cleavages(missed_cleavages);
        }
        if let Some(tolerance) = self.precursor_tolerance {
            builder = builder.precursor_mass_tolerance(tolerance);
        }
        if let Some(tolerance) = self.fragment_tolerance {
            builder = builder.fragment_mass_tolerance(tolerance);
        }
        if !self.charges.is_empty() {
            builder = builder.charges(self.charges.clone());
        }
        for modification in &self.fixed_mods {
            builder = builder.fixed_modification(modification);
        }
        for modification in &self.variable_mods {
            builder = builder.variable_modification(modification);
        }
        Ok(builder.build())
    }

    fn reader_options(&self) -> MGFReaderOptions {
        MGFReaderOptions {
            extra_column: match self.extra_column {
                ExtraColumnArg::Ignore => ExtraColumnPolicy::Ignore,
                ExtraColumnArg::Reject => ExtraColumnPolicy::Reject,
                ExtraColumnArg::Retain => ExtraColumnPolicy::Retain,
            },
            title_mode: if self.full_titles {
                TitleMode::Full
            } else {
                TitleMode::FirstSegment
            },
        }
    }

    fn precision(&self) -> FloatPrecision {
        match self.precision {
            Some(0) => FloatPrecision::Shortest,
            Some(digits) => FloatPrecision::Significant(digits),
            None => FloatPrecision::default(),
        }
    }

    fn write<W: io::Write>(
        &self,
        stream: W,
        parameters: SearchParameters,
        spectra: &[Spectrum],
    ) -> io::Result<usize> {
        let filename = self
            .input
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| mascot_infile::io::mgf::DEFAULT_FILENAME.to_string());
        let mut writer = MascotInfileWriter::with_parameters(stream, parameters)
            .with_precision(self.precision())
            .with_filename(filename);
        if let Some(boundary) = &self.boundary {
            writer.set_boundary(boundary.as_str());
        }
        writer.store_experiment(&self.title, spectra)
    }

    fn main(&self) -> io::Result<()> {
        let parameters = self.search_parameters()?;
        let mut reader =
            MGFReader::with_options(fs::File::open(&self.input)?, self.reader_options());
        let spectra = reader
            .read_all()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        info!(
            "Read {} spectra from {}",
            spectra.len(),
            self.input.display()
        );

        let written = if self.output == "-" {
            self.write(io::stdout().lock(), parameters, &spectra)?
        } else {
            self.write(fs::File::create(&self.output)?, parameters, &spectra)?
        };
        info!("Wrote {written} spectra");
        Ok(())
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = cli.main() {
        eprintln!("{e}");
        exit(1);
    }
}
