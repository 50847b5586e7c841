//! Histogram equalization command

use anyhow::Result;

use medscan_ops::equalize::equalize;

use crate::EqualizeArgs;

pub fn run(args: EqualizeArgs) -> Result<()> {
    let img = super::load_image(&args.input)?;
    let stem = super::input_stem(&args.input);

    super::save_histogram(
        &args.out.hist_dir.join(format!("{stem}_original_hist.png")),
        "Original Histogram",
        &img,
        args.out.detail_hist,
    )?;

    let out = equalize(&img);

    super::save_histogram(
        &args.out.hist_dir.join(format!("{stem}_equalize_hist.png")),
        "Histogram After Equalization",
        &out,
        args.out.detail_hist,
    )?;
    super::save_image(&args.out.output, &out)?;

    println!("Enhanced image saved to: {}", args.out.output.display());
    Ok(())
}
