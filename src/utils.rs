//! 渲染辅助函数

use serde::Serializer;
use std::time::Duration;

/// 详情页相对地址
pub const DETAIL_PAGE: &str = "detail.html";
/// 列表页相对地址
pub const INDEX_PAGE: &str = "index.html";

/// 生成 `detail.html?id=<编码后的 id>`
pub fn detail_url(id: &str) -> String {
    format!("{}?id={}", DETAIL_PAGE, urlencoding::encode(id))
}

/// 转义 HTML 文本与属性值
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// 动画延迟写成 CSS 秒数，例如 `0.3s`
pub fn css_seconds(delay: Duration) -> String {
    format!("{:.1}s", delay.as_secs_f64())
}

/// 时长序列化为整数毫秒，供页面脚本直接传给 `setTimeout`
pub fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_url_round_trips_id() {
        for id in ["arc-eclipse", "noir pulse", "a&b=c", "ekor/ß?"] {
            let url = detail_url(id);
            let encoded = url.strip_prefix("detail.html?id=").unwrap();
            assert!(!encoded.contains('&') && !encoded.contains(' '));
            assert_eq!(urlencoding::decode(encoded).unwrap(), id);
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b class="x">Tom & 'Jerry'</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_css_seconds() {
        assert_eq!(css_seconds(Duration::from_millis(0)), "0.0s");
        assert_eq!(css_seconds(Duration::from_millis(300)), "0.3s");
    }

    #[test]
    fn test_serialize_millis() {
        #[derive(serde::Serialize)]
        struct Wait {
            #[serde(serialize_with = "serialize_millis")]
            after_ms: Duration,
        }
        let json = serde_json::to_string(&Wait {
            after_ms: Duration::from_millis(300),
        })
        .unwrap();
        assert_eq!(json, r#"{"after_ms":300}"#);
    }
}
