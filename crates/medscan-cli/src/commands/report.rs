//! Full report command: every method, every histogram.

use anyhow::Result;

use medscan_ops::equalize::equalize;
use medscan_ops::gamma::gamma_correct;
use medscan_ops::stretch::contrast_stretch;
use medscan_ops::Pipeline;

use crate::ReportArgs;

pub fn run(args: ReportArgs) -> Result<()> {
    let img = super::load_image(&args.input)?;
    let stem = super::input_stem(&args.input);
    let detail = args.detail_hist;
    let (g, p) = (&args.gamma, &args.stretch);

    super::save_histogram(
        &args.hist_dir.join(format!("{stem}_original_hist.png")),
        "Original Histogram",
        &img,
        detail,
    )?;

    // 1) Gamma correction
    let gamma_img = gamma_correct(&img, g.gamma, g.gain)?;
    super::save_image(&args.images_dir.join(format!("{stem}_gamma.png")), &gamma_img)?;
    super::save_histogram(
        &args.hist_dir.join(format!("{stem}_gamma_hist.png")),
        &format!("Histogram After Gamma (gamma={})", g.gamma),
        &gamma_img,
        detail,
    )?;

    // 2) Contrast stretching
    let stretch_img = contrast_stretch(&img, p.r1, p.s1, p.r2, p.s2)?;
    super::save_image(
        &args.images_dir.join(format!("{stem}_stretch.png")),
        &stretch_img,
    )?;
    super::save_histogram(
        &args.hist_dir.join(format!("{stem}_stretch_hist.png")),
        "Histogram After Contrast Stretching",
        &stretch_img,
        detail,
    )?;

    // 3) Histogram equalization
    let eq_img = equalize(&img);
    super::save_image(&args.images_dir.join(format!("{stem}_equalize.png")), &eq_img)?;
    super::save_histogram(
        &args.hist_dir.join(format!("{stem}_equalize_hist.png")),
        "Histogram After Equalization",
        &eq_img,
        detail,
    )?;

    // 4) Combined (contrast -> gamma)
    let combined_img =
        Pipeline::contrast_then_gamma(g.gamma, g.gain, p.r1, p.s1, p.r2, p.s2).apply(&img)?;
    super::save_image(
        &args.images_dir.join(format!("{stem}_combined.png")),
        &combined_img,
    )?;
    super::save_histogram(
        &args.hist_dir.join(format!("{stem}_combined_hist.png")),
        &format!("Histogram After Contrast->Gamma (gamma={})", g.gamma),
        &combined_img,
        detail,
    )?;

    println!(
        "Report written to {} and {}",
        args.images_dir.display(),
        args.hist_dir.display()
    );
    Ok(())
}
