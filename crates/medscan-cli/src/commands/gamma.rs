//! Gamma correction command

use anyhow::Result;

use medscan_ops::gamma::gamma_correct;

use crate::GammaArgs;

pub fn run(args: GammaArgs) -> Result<()> {
    let img = super::load_image(&args.input)?;
    let stem = super::input_stem(&args.input);

    super::save_histogram(
        &args.out.hist_dir.join(format!("{stem}_original_hist.png")),
        "Original Histogram",
        &img,
        args.out.detail_hist,
    )?;

    let out = gamma_correct(&img, args.gamma.gamma, args.gamma.gain)?;

    super::save_histogram(
        &args.out.hist_dir.join(format!("{stem}_gamma_hist.png")),
        &format!("Histogram After Gamma (gamma={})", args.gamma.gamma),
        &out,
        args.out.detail_hist,
    )?;
    super::save_image(&args.out.output, &out)?;

    println!("Enhanced image saved to: {}", args.out.output.display());
    Ok(())
}
