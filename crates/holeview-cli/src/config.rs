pub mod defaults;
pub mod models;

use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use holeview::core::utils::color::Color;
use holeview::render::style::{Style, Theme};
use holeview::render::svg::SvgCanvas;
use holeview::workflows::penalty::ContourOptions;
use models::{AppConfig, CliOverrides, RenderKind};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialPathsConfig {
    problem: Option<String>,
    triangles: Option<String>,
    penalty_map: Option<String>,
    pose: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialOutputConfig {
    triangles: Option<String>,
    contour: Option<String>,
    pose: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    margin: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialThemeConfig {
    hole_color: Option<String>,
    hole_width: Option<f64>,
    triangle_color: Option<String>,
    triangle_width: Option<f64>,
    original_figure_color: Option<String>,
    original_figure_width: Option<f64>,
    posed_figure_color: Option<String>,
    posed_figure_width: Option<f64>,
    stretched_edge_color: Option<String>,
    marker_color: Option<String>,
    marker_radius: Option<f64>,
    contour_palette: Option<Vec<String>>,
    contour_width: Option<f64>,
    label_size: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialContourConfig {
    target_vertex: Option<usize>,
    max_levels: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRenderConfig {
    paths: Option<PartialPathsConfig>,
    output: Option<PartialOutputConfig>,
    theme: Option<PartialThemeConfig>,
    contour: Option<PartialContourConfig>,
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn parse_color(key: &str, value: &str) -> Result<Color> {
    value
        .parse()
        .map_err(|e| CliError::Config(format!("{}: {}", key, e)))
}

fn merge_style(base: Style, color: Option<&str>, width: Option<f64>, key: &str) -> Result<Style> {
    let color = match color {
        Some(c) => parse_color(key, c)?,
        None => base.color,
    };
    Ok(Style::new(color, width.unwrap_or(base.width)))
}

impl PartialRenderConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(
        mut self,
        set_values: &[String],
        overrides: &CliOverrides,
    ) -> Result<AppConfig> {
        self.apply_set_values(set_values)?;

        let defaults = DefaultsConfig::default();
        let paths = self.paths.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();
        let contour = self.contour.take().unwrap_or_default();
        let theme = Self::merge_theme(self.theme.take().unwrap_or_default())?;

        let mut config = AppConfig {
            problem_template: overrides
                .problem
                .clone()
                .or(paths.problem)
                .unwrap_or_else(|| defaults.problem.to_string()),
            triangles_template: paths
                .triangles
                .unwrap_or_else(|| defaults.triangles.to_string()),
            penalty_map_template: paths
                .penalty_map
                .unwrap_or_else(|| defaults.penalty_map.to_string()),
            pose_template: paths.pose.unwrap_or_else(|| defaults.pose.to_string()),
            triangles_output: output
                .triangles
                .unwrap_or_else(|| defaults.triangles_output.to_string()),
            contour_output: output
                .contour
                .unwrap_or_else(|| defaults.contour_output.to_string()),
            pose_output: output
                .pose
                .unwrap_or_else(|| defaults.pose_output.to_string()),
            canvas: SvgCanvas {
                width: overrides.width.or(output.width).unwrap_or(defaults.width),
                height: overrides.height.or(output.height).unwrap_or(defaults.height),
                margin: output.margin.unwrap_or(SvgCanvas::default().margin),
            },
            theme,
            contour: ContourOptions {
                target_vertex: overrides
                    .target_vertex
                    .or(contour.target_vertex)
                    .unwrap_or(defaults.target_vertex),
                max_levels: overrides
                    .max_levels
                    .or(contour.max_levels)
                    .unwrap_or(defaults.max_levels),
            },
        };

        if let Some(kind) = overrides.kind {
            Self::apply_kind_overrides(&mut config, kind, overrides);
        }
        Self::validate(&config)?;
        Ok(config)
    }

    fn apply_kind_overrides(config: &mut AppConfig, kind: RenderKind, overrides: &CliOverrides) {
        if let Some(input) = &overrides.input {
            let slot = match kind {
                RenderKind::Triangles => &mut config.triangles_template,
                RenderKind::Contour => &mut config.penalty_map_template,
                RenderKind::Pose => &mut config.pose_template,
            };
            *slot = input.clone();
        }
        if let Some(output) = &overrides.output {
            let slot = match kind {
                RenderKind::Triangles => &mut config.triangles_output,
                RenderKind::Contour => &mut config.contour_output,
                RenderKind::Pose => &mut config.pose_output,
            };
            *slot = output.clone();
        }
    }

    fn merge_theme(partial: PartialThemeConfig) -> Result<Theme> {
        let base = Theme::default();
        let contour_palette = match partial.contour_palette {
            Some(names) => names
                .iter()
                .map(|n| parse_color("theme.contour-palette", n))
                .collect::<Result<Vec<_>>>()?,
            None => base.contour_palette.clone(),
        };

        let theme = Theme {
            hole: merge_style(
                base.hole,
                partial.hole_color.as_deref(),
                partial.hole_width,
                "theme.hole-color",
            )?,
            triangle: merge_style(
                base.triangle,
                partial.triangle_color.as_deref(),
                partial.triangle_width,
                "theme.triangle-color",
            )?,
            original_figure: merge_style(
                base.original_figure,
                partial.original_figure_color.as_deref(),
                partial.original_figure_width,
                "theme.original-figure-color",
            )?,
            posed_figure: merge_style(
                base.posed_figure,
                partial.posed_figure_color.as_deref(),
                partial.posed_figure_width,
                "theme.posed-figure-color",
            )?,
            stretched_edge: merge_style(
                base.stretched_edge,
                partial.stretched_edge_color.as_deref(),
                None,
                "theme.stretched-edge-color",
            )?,
            marker: merge_style(
                base.marker,
                partial.marker_color.as_deref(),
                None,
                "theme.marker-color",
            )?,
            marker_radius: partial.marker_radius.unwrap_or(base.marker_radius),
            contour_palette,
            contour_width: partial.contour_width.unwrap_or(base.contour_width),
            label_size: partial.label_size.unwrap_or(base.label_size),
        };

        if !theme.hole_is_distinct() {
            return Err(CliError::Config(
                "The hole style must differ from every other element's style.".to_string(),
            ));
        }
        Ok(theme)
    }

    fn validate(config: &AppConfig) -> Result<()> {
        if config.canvas.width == 0 || config.canvas.height == 0 {
            return Err(CliError::Config(
                "Canvas width and height must be positive.".to_string(),
            ));
        }
        if config.contour.max_levels == 0 {
            return Err(CliError::Config(
                "`contour.max-levels` must be at least 1.".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let text = || Some(value.trim().to_string());

            match key {
                "paths.problem" => self.paths_mut().problem = text(),
                "paths.triangles" => self.paths_mut().triangles = text(),
                "paths.penalty-map" => self.paths_mut().penalty_map = text(),
                "paths.pose" => self.paths_mut().pose = text(),
                "output.triangles" => self.output_mut().triangles = text(),
                "output.contour" => self.output_mut().contour = text(),
                "output.pose" => self.output_mut().pose = text(),
                "output.width" => {
                    self.output_mut().width = Some(parse_value(key, value, "integer")?)
                }
                "output.height" => {
                    self.output_mut().height = Some(parse_value(key, value, "integer")?)
                }
                "output.margin" => {
                    self.output_mut().margin = Some(parse_value(key, value, "float")?)
                }
                "theme.hole-color" => self.theme_mut().hole_color = text(),
                "theme.hole-width" => {
                    self.theme_mut().hole_width = Some(parse_value(key, value, "float")?)
                }
                "theme.triangle-color" => self.theme_mut().triangle_color = text(),
                "theme.original-figure-color" => self.theme_mut().original_figure_color = text(),
                "theme.posed-figure-color" => self.theme_mut().posed_figure_color = text(),
                "theme.stretched-edge-color" => self.theme_mut().stretched_edge_color = text(),
                "theme.marker-color" => self.theme_mut().marker_color = text(),
                "theme.marker-radius" => {
                    self.theme_mut().marker_radius = Some(parse_value(key, value, "float")?)
                }
                "contour.target-vertex" => {
                    self.contour_mut().target_vertex = Some(parse_value(key, value, "integer")?)
                }
                "contour.max-levels" => {
                    self.contour_mut().max_levels = Some(parse_value(key, value, "integer")?)
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn paths_mut(&mut self) -> &mut PartialPathsConfig {
        self.paths.get_or_insert_with(Default::default)
    }

    fn output_mut(&mut self) -> &mut PartialOutputConfig {
        self.output.get_or_insert_with(Default::default)
    }

    fn theme_mut(&mut self) -> &mut PartialThemeConfig {
        self.theme.get_or_insert_with(Default::default)
    }

    fn contour_mut(&mut self) -> &mut PartialContourConfig {
        self.contour.get_or_insert_with(Default::default)
    }
}
