//! Transform chaining command

use anyhow::{bail, Result};

use medscan_ops::{Pipeline, Transform};

use crate::{CombineArgs, GammaParams, StretchParams};

pub fn run(args: CombineArgs) -> Result<()> {
    let pipeline = build_pipeline(&args.stages, &args.gamma, &args.stretch)?;

    let img = super::load_image(&args.input)?;
    let stem = super::input_stem(&args.input);

    super::save_histogram(
        &args.out.hist_dir.join(format!("{stem}_original_hist.png")),
        "Original Histogram",
        &img,
        args.out.detail_hist,
    )?;

    let out = pipeline.apply(&img)?;

    let label = args.stages.join(" -> ");
    super::save_histogram(
        &args.out.hist_dir.join(format!("{stem}_combined_hist.png")),
        &format!("Histogram After {label}"),
        &out,
        args.out.detail_hist,
    )?;
    super::save_image(&args.out.output, &out)?;

    println!("Enhanced image saved to: {}", args.out.output.display());
    Ok(())
}

/// Maps stage names to transforms, in the order given.
pub fn build_pipeline(
    stages: &[String],
    gamma: &GammaParams,
    stretch: &StretchParams,
) -> Result<Pipeline> {
    if stages.is_empty() {
        bail!("at least one stage is required");
    }
    let mut pipeline = Pipeline::new();
    for stage in stages {
        let transform = match stage.trim().to_lowercase().as_str() {
            "gamma" => Transform::Gamma {
                gamma: gamma.gamma,
                gain: gamma.gain,
            },
            "stretch" | "contrast" => Transform::Stretch {
                r1: stretch.r1,
                s1: stretch.s1,
                r2: stretch.r2,
                s2: stretch.s2,
            },
            "equalize" | "hist-eq" | "histeq" => Transform::Equalize,
            other => bail!("unknown stage '{other}' (expected gamma, stretch, or equalize)"),
        };
        pipeline = pipeline.then(transform);
    }
    pipeline.validate()?;
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> (GammaParams, StretchParams) {
        (
            GammaParams {
                gamma: 0.5,
                gain: 1.0,
            },
            StretchParams {
                r1: 70,
                s1: 0,
                r2: 140,
                s2: 255,
            },
        )
    }

    #[test]
    fn test_default_combined_order() {
        let (g, s) = params();
        let pipeline =
            build_pipeline(&["stretch".into(), "gamma".into()], &g, &s).unwrap();
        assert_eq!(pipeline.stages().len(), 2);
        assert_eq!(pipeline.stages()[0].name(), "stretch");
        assert_eq!(pipeline.stages()[1].name(), "gamma");
    }

    #[test]
    fn test_aliases_and_any_order() {
        let (g, s) = params();
        let pipeline = build_pipeline(
            &["gamma".into(), "hist-eq".into(), "contrast".into()],
            &g,
            &s,
        )
        .unwrap();
        assert_eq!(pipeline.stages()[1].name(), "equalize");
        assert_eq!(pipeline.stages()[2].name(), "stretch");
    }

    #[test]
    fn test_unknown_stage_rejected() {
        let (g, s) = params();
        assert!(build_pipeline(&["sharpen".into()], &g, &s).is_err());
        assert!(build_pipeline(&[], &g, &s).is_err());
    }

    #[test]
    fn test_invalid_breakpoints_rejected_up_front() {
        let (g, _) = params();
        let s = StretchParams {
            r1: 100,
            s1: 0,
            r2: 100,
            s2: 255,
        };
        assert!(build_pipeline(&["stretch".into()], &g, &s).is_err());
    }
}
