// LaTeX-matched plot settings
// Builds the rc params for a document and pushes them into a style sink

use crate::engine::{self, TexEngine};
use crate::error::StyleError;
use crate::sink::StyleSink;
use crate::value::{RcParams, Value};

/// Default width / height ratio of a figure
pub const GOLDEN_RATIO: f64 = 1.618;

/// Default figure width relative to the text width
pub const DEFAULT_SCALE: f64 = 0.9;

pub const DEFAULT_PRIM_FONTSIZE_PT: f64 = 11.0;
pub const DEFAULT_SEC_FONTSIZE_PT: f64 = 9.0;

/// Output format routed through pgf in interactive mode
pub const INTERACTIVE_FORMAT: &str = "pdf";
pub const PGF_BACKEND: &str = "pgf";

/// Figure dimensions in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigSize {
    pub width: f64,
    pub height: f64,
}

impl FigSize {
    /// `scale` of the text width wide, `width / ratio` high
    pub fn from_textwidth(textwidth_inches: f64, scale: f64, ratio: f64) -> Self {
        let width = scale * textwidth_inches;
        let height = width / ratio;
        Self { width, height }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

impl From<FigSize> for Value {
    fn from(size: FigSize) -> Self {
        Value::List(vec![Value::Number(size.width), Value::Number(size.height)])
    }
}

/// Collects the document setup, then applies it to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsBuilder {
    textwidth_inches: f64,
    engine: TexEngine,
    prim_fontsize_pt: f64,
    sec_fontsize_pt: f64,
    interactive: bool,
    overrides: RcParams,
}

impl SettingsBuilder {
    pub fn new(textwidth_inches: f64, engine: TexEngine) -> Self {
        Self {
            textwidth_inches,
            engine,
            prim_fontsize_pt: DEFAULT_PRIM_FONTSIZE_PT,
            sec_fontsize_pt: DEFAULT_SEC_FONTSIZE_PT,
            interactive: true,
            overrides: RcParams::new(),
        }
    }

    /// Same as `new`, validating the engine name first
    pub fn from_engine_name(textwidth_inches: f64, texengine: &str) -> Result<Self, StyleError> {
        Ok(Self::new(textwidth_inches, texengine.parse()?))
    }

    /// Used for `font.size` and `axes.labelsize`
    pub fn prim_fontsize_pt(mut self, size: f64) -> Self {
        self.prim_fontsize_pt = size;
        self
    }

    /// Used for `legend.fontsize`, `xtick.labelsize` and `ytick.labelsize`
    pub fn sec_fontsize_pt(mut self, size: f64) -> Self {
        self.sec_fontsize_pt = size;
        self
    }

    /// Interactive: only register pgf for pdf output. Otherwise switch the
    /// whole library to the pgf backend.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Replace the whole override mapping
    pub fn overrides(mut self, overrides: RcParams) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn override_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    pub fn textwidth_inches(&self) -> f64 {
        self.textwidth_inches
    }

    pub fn engine(&self) -> TexEngine {
        self.engine
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn validate(&self) -> Result<(), StyleError> {
        for (name, value) in [
            ("textwidth_inches", self.textwidth_inches),
            ("prim_fontsize_pt", self.prim_fontsize_pt),
            ("sec_fontsize_pt", self.sec_fontsize_pt),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StyleError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    /// Params before overrides
    fn base_params(&self) -> RcParams {
        let prim = Value::Number(self.prim_fontsize_pt);
        let sec = Value::Number(self.sec_fontsize_pt);
        let figsize =
            FigSize::from_textwidth(self.textwidth_inches, DEFAULT_SCALE, GOLDEN_RATIO);

        let mut params = RcParams::new();
        // TeX text rendering with unicode
        params.insert("text.usetex".into(), Value::Bool(true));
        params.insert("text.latex.unicode".into(), Value::Bool(true));
        params.insert("text.latex.preamble".into(), Value::empty_list());
        params.insert("font.family".into(), Value::from("serif"));
        // Empty families: fonts come from the document
        params.insert("font.serif".into(), Value::empty_list());
        params.insert("font.sans-serif".into(), Value::empty_list());
        params.insert("font.monospace".into(), Value::empty_list());
        params.insert("font.size".into(), prim.clone());
        params.insert("axes.labelsize".into(), prim);
        params.insert("legend.fontsize".into(), sec.clone());
        params.insert("xtick.labelsize".into(), sec.clone());
        params.insert("ytick.labelsize".into(), sec);
        params.insert("figure.figsize".into(), figsize.into());
        params.insert("pgf.texsystem".into(), Value::from(self.engine.as_str()));
        params.insert(
            "pgf.preamble".into(),
            Value::string_list(engine::encoding_preamble(self.engine.as_str()).iter().copied()),
        );
        params
    }

    /// Final params: base overlaid with overrides. Does not touch any sink.
    pub fn params(&self) -> Result<RcParams, StyleError> {
        self.validate()?;
        let mut params = self.base_params();
        for (key, value) in &self.overrides {
            params.insert(key.clone(), value.clone());
        }
        Ok(params)
    }

    /// Compute the settings and write them into `sink`.
    ///
    /// The backend is set up first, then every param is written.
    pub fn apply<S: StyleSink + ?Sized>(self, sink: &mut S) -> Result<Settings, StyleError> {
        let params = self.params()?;

        if self.interactive {
            sink.register_backend(INTERACTIVE_FORMAT, PGF_BACKEND);
        } else {
            sink.use_backend(PGF_BACKEND);
        }
        for (key, value) in &params {
            sink.update(key, value);
        }

        log::debug!(
            "Applied {} style params (engine={}, interactive={}, overrides={})",
            params.len(),
            self.engine,
            self.interactive,
            self.overrides.len()
        );

        Ok(Settings {
            textwidth_inches: self.textwidth_inches,
            engine: self.engine,
            interactive: self.interactive,
            params,
        })
    }
}

/// Applied settings. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    textwidth_inches: f64,
    engine: TexEngine,
    interactive: bool,
    params: RcParams,
}

impl Settings {
    pub fn builder(textwidth_inches: f64, engine: TexEngine) -> SettingsBuilder {
        SettingsBuilder::new(textwidth_inches, engine)
    }

    /// Build with default font sizes, interactive mode and no overrides
    pub fn build<S: StyleSink + ?Sized>(
        textwidth_inches: f64,
        texengine: &str,
        sink: &mut S,
    ) -> Result<Self, StyleError> {
        SettingsBuilder::from_engine_name(textwidth_inches, texengine)?.apply(sink)
    }

    /// Everything that was written to the sink
    pub fn latex_settings(&self) -> &RcParams {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn textwidth_inches(&self) -> f64 {
        self.textwidth_inches
    }

    pub fn engine(&self) -> TexEngine {
        self.engine
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// New figure size relative to the document's text width.
    /// `scale = 1` is the full text width, `ratio` is width / height.
    pub fn make_figsize(&self, scale: f64, ratio: f64) -> FigSize {
        FigSize::from_textwidth(self.textwidth_inches, scale, ratio)
    }

    pub fn default_figsize(&self) -> FigSize {
        self.make_figsize(DEFAULT_SCALE, GOLDEN_RATIO)
    }
}
