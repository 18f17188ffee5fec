#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;

pub const PAGE_PATH: &str = "/obd/stats/etrn/view/daily_s1.php";

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head><meta charset="UTF-8"><title>気象庁｜過去の気象データ検索</title></head>
<body>
<div id="main">
<table class="data2_s" id="tablefix1">
<tr class="mtx"><th scope="col" rowspan="3">日</th><th scope="colgroup" colspan="2">気圧(hPa)</th><th scope="colgroup" colspan="3">降水量(mm)</th><th scope="colgroup" colspan="3">気温(℃)</th><th scope="colgroup" colspan="2">湿度(％)</th><th scope="colgroup" colspan="5">風向・風速(m/s)</th><th scope="col" rowspan="3">日照<br>時間<br>(h)</th><th scope="colgroup" colspan="2">雪(cm)</th><th scope="colgroup" colspan="2">天気概況</th></tr>
<tr class="mtx"><th scope="col">現地</th><th scope="col">海面</th><th scope="col">合計</th><th scope="col">最大1時間</th><th scope="col">最大10分間</th><th scope="col">平均</th><th scope="col">最高</th><th scope="col">最低</th><th scope="col">平均</th><th scope="col">最小</th><th scope="col">平均<br>風速</th><th colspan="2" scope="colgroup">最大風速</th><th colspan="2" scope="colgroup">最大瞬間風速</th><th scope="col">降雪</th><th scope="col">最深積雪</th><th scope="col">昼<br>(06:00-18:00)</th><th scope="col">夜<br>(18:00-翌日06:00)</th></tr>
<tr class="mtx"><th scope="col">風速</th><th scope="col">風向</th><th scope="col">風速</th><th scope="col">風向</th></tr>
"#;

const PAGE_TAIL: &str = "</table>\n</div>\n</body>\n</html>\n";

/// One day of readings as the site renders it.
pub struct Day {
    pub day: u32,
    pub local_pressure: &'static str,
    pub max_temperature: &'static str,
    pub direction: &'static str,
}

impl Day {
    pub fn new(day: u32, direction: &'static str) -> Self {
        Self {
            day,
            local_pressure: "1012.4",
            max_temperature: "9.8",
            direction,
        }
    }
}

fn td(text: &str) -> String {
    format!(r#"<td class="data_0_0">{}</td>"#, text)
}

fn day_row(d: &Day) -> String {
    let cells = [
        d.local_pressure,
        "1016.3",
        "0.5",
        "0.5",
        "0.5",
        "5.1",
        d.max_temperature,
        "1.2",
        "56",
        "31",
        "2.6",
        "5.9",
        d.direction,
        "10.4",
        "北西",
        "7.9",
        "--",
        "--",
        "晴",
        "晴後曇",
    ];
    let mut row = format!(
        r#"<tr class="mtx" style="text-align:right;"><td style="white-space:nowrap"><div class="a_print"><a href="hourly_s1.php?day={0}">{0}</a></div></td>"#,
        d.day
    );
    for cell in cells {
        row.push_str(&td(cell));
    }
    row.push_str("</tr>\n");
    row
}

/// A month page with the given days followed by an empty filler row.
pub fn month_page(days: &[Day]) -> String {
    let mut html = PAGE_HEAD.to_string();
    for d in days {
        html.push_str(&day_row(d));
    }
    html.push_str(r#"<tr class="mtx"><td></td>"#);
    for _ in 0..20 {
        html.push_str("<td></td>");
    }
    html.push_str("</tr>\n");
    html.push_str(PAGE_TAIL);
    html
}

pub fn mock_month<'a>(server: &'a MockServer, year: i32, month: u32, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(PAGE_PATH)
            .query_param("prec_no", "44")
            .query_param("block_no", "47662")
            .query_param("year", year.to_string())
            .query_param("month", month.to_string())
            .query_param("day", "01");
        then.status(200)
            .header("Content-Type", "text/html; charset=UTF-8")
            .body(body);
    })
}
