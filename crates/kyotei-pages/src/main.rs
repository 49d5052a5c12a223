use anyhow::Result;
use kyotei_pages::Site;

fn main() -> Result<()> {
    let site = Site::builder().root(".").build();

    let summary = site.generate()?;

    if summary.wrote_post {
        println!("Wrote {}", summary.post_path);
    } else {
        println!("{} already exists, skipped", summary.post_path);
    }

    if summary.linked {
        println!("Linked {} from index.html", summary.date_key);
    } else {
        println!("index.html already links {}", summary.date_key);
    }

    Ok(())
}
