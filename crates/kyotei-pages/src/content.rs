//! The post body content. Everything here is placeholder text for verifying
//! the daily update loop; a real data source can implement
//! [`ContentProvider`] later without touching the rendering.

use std::fmt;

/// The disclaimer rendered verbatim at the bottom of every post.
pub const DISCLAIMER: &str = "本ページの内容は、公開情報や一般的傾向にもとづく整理・見解であり、的中を保証するものではありません。投票は自己責任で行ってください。直前のオッズ・出走取消・気象など当日変動要素は反映できない場合があります。";

/// A single bet: the predicted finishing order of three boats.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Pick {
    pub first: u8,
    pub second: u8,
    pub third: u8,
}

impl Pick {
    pub fn new(first: u8, second: u8, third: u8) -> Self {
        Self {
            first,
            second,
            third,
        }
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{}", self.first, self.second, self.third)
    }
}

/// Supplies the talking points and picks for a post.
pub trait ContentProvider: Send + Sync {
    fn talking_points(&self) -> Vec<String>;

    fn picks(&self) -> Vec<Pick>;
}

/// The fixed template content used until a real data source exists. Repeated
/// calls return identical content, which keeps post rendering deterministic.
pub struct PlaceholderContent;

impl ContentProvider for PlaceholderContent {
    fn talking_points(&self) -> Vec<String> {
        vec![
            "この記事は自動更新の動作確認用テンプレです（後で実データ連携に置き換え可能）。".to_string(),
            "現時点では断定表現を避け、一般的傾向の整理に留めます。".to_string(),
            "買い目は「点数固定の型」を確認するためのダミーです。".to_string(),
        ]
    }

    fn picks(&self) -> Vec<Pick> {
        vec![Pick::new(1, 2, 3), Pick::new(1, 3, 2), Pick::new(2, 1, 3)]
    }
}
