// Imports
use indicatif::{MultiProgress, ProgressBar};

pub fn greenify(s: &str) -> String {
    console::style(s).green().to_string()
}

pub fn simple_progressbar(
    len: usize,
    text: impl std::fmt::Display,
    multi: Option<&MultiProgress>,
) -> ProgressBar {
    #[cfg(feature = "progress")]
    {
        let mut pb = ProgressBar::new(len as u64)
            .with_style(
                indicatif::ProgressStyle::with_template(&format!(
                    "{{msg}} [{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}} {text}"
                ))
                .unwrap(),
            )
            .with_message("⋆")
            .with_finish(indicatif::ProgressFinish::WithMessage(greenify("✔").into()));
        if let Some(multi) = multi {
            pb = multi.add(pb);
            multi.set_move_cursor(true);
        }
        pb
    }

    #[cfg(not(feature = "progress"))]
    {
        let _ = (len, multi);
        let _ = text;
        ProgressBar::hidden()
    }
}
