//! Renders a complete, self-contained HTML post for one date key. Rendering
//! is a pure function: equal inputs produce byte-identical output, so a post
//! never needs to be regenerated once written.

use crate::content::{ContentProvider, DISCLAIMER};
use crate::date::DateKey;
use crate::html::*;

const TITLE_SUFFIX: &str = "｜競艇テンプレ（自動更新テスト）";

const DESCRIPTION: &str = "競艇予想のテンプレ記事（自動更新テスト）。的中保証なし。";

const STYLES: &str = "\n    body{font-family:system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial,sans-serif;max-width:860px;margin:0 auto;padding:18px;line-height:1.7}\n    header{padding:14px 0;border-bottom:1px solid #ddd;margin-bottom:16px}\n    h1{font-size:22px;margin:0}\n    .card{border:1px solid #e5e5e5;border-radius:12px;padding:14px;margin:12px 0}\n    .muted{color:#666;font-size:13px}\n    a{color:inherit}\n  ";

pub fn render_post(
    date_key: &DateKey,
    base_url: &str,
    content: &dyn ContentProvider,
) -> Result<String, std::fmt::Error> {
    let post_title = format!("{date_key}{TITLE_SUFFIX}");

    let document = html()
        .lang("ja")
        .child(
            head()
                .child(meta().attr("charset", "utf-8"))
                .child(
                    meta()
                        .attr("name", "viewport")
                        .attr("content", "width=device-width,initial-scale=1"),
                )
                .child(title().text(post_title.as_str()))
                .child(meta().attr("name", "description").attr("content", DESCRIPTION))
                .child(style().text(STYLES)),
        )
        .child(
            body()
                .child(
                    header()
                        .child(
                            div().class("muted").child(
                                a().href(format!("{base_url}index.html"))
                                    .text("← トップに戻る"),
                            ),
                        )
                        .child(h1().text(post_title.as_str()))
                        .child(div().class("muted").text(format!("更新：{date_key}（JST）"))),
                )
                .child(
                    div()
                        .class("card")
                        .child(
                            h2().attr("style", "margin:0 0 8px;font-size:18px;")
                                .text("本文（テンプレ）"),
                        )
                        .child(ul().children(
                            content
                                .talking_points()
                                .iter()
                                .map(|point| li().text(point.as_str())),
                        ))
                        .child(
                            h3().attr("style", "margin:14px 0 8px;font-size:16px;")
                                .text("買い目（3点）"),
                        )
                        .child(
                            ul().children(
                                content.picks().iter().map(|pick| li().text(pick.to_string())),
                            ),
                        )
                        .child(
                            div()
                                .class("muted")
                                .attr("style", "margin-top:10px;")
                                .text(format!("免責：{DISCLAIMER}")),
                        ),
                ),
        );

    Ok(format!("<!doctype html>\n{}", document.render_to_string()?))
}
