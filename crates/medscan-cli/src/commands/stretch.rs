//! Contrast stretching command

use anyhow::Result;

use medscan_ops::stretch::contrast_stretch;

use crate::StretchArgs;

pub fn run(args: StretchArgs) -> Result<()> {
    let img = super::load_image(&args.input)?;
    let stem = super::input_stem(&args.input);
    let p = &args.stretch;

    super::save_histogram(
        &args.out.hist_dir.join(format!("{stem}_original_hist.png")),
        "Original Histogram",
        &img,
        args.out.detail_hist,
    )?;

    let out = contrast_stretch(&img, p.r1, p.s1, p.r2, p.s2)?;

    super::save_histogram(
        &args.out.hist_dir.join(format!("{stem}_stretch_hist.png")),
        "Histogram After Contrast Stretching",
        &out,
        args.out.detail_hist,
    )?;
    super::save_image(&args.out.output, &out)?;

    println!("Enhanced image saved to: {}", args.out.output.display());
    Ok(())
}
