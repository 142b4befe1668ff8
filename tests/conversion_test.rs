mod test_data;

use approx::assert_abs_diff_eq;
use chrono::{NaiveDate, NaiveTime};

use hdobconv::config::{ConverterConfig, ReportInterval, TimeOfDay};
use hdobconv::filter::TimeWindow;
use hdobconv::hdob::decode_report;
use hdobconv::hdob::encode::{encode_latitude, encode_longitude};
use hdobconv::hdob::decode::{decode_latitude, decode_longitude};
use hdobconv::physics::altitude_from_pressure;
use hdobconv::{Converter, Outcome};

use test_data::{Row, at, steady_rows, to_text};

const MISSION: &str = "AF302 0915A HELENE";

fn convert(config: &ConverterConfig, window: TimeWindow, text: &str) -> Outcome {
    Converter::new(config, window).convert_text(text, MISSION, None).0
}

fn report_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|l| l.split(' ').count() == 13)
        .map(str::to_string)
        .collect()
}

#[test]
fn test_steady_bin_renders_exact_message() {
    let config = ConverterConfig::default();
    let text = to_text(&steady_rows(0..30));
    let out = convert(&config, TimeWindow::default(), &text).text();

    assert_eq!(
        out,
        "URNT15 KNHC 151800\n\
         AF302 0915A HELENE HDOB 01 20240915\n\
         180015 2530N 08015W 7004 03050 9967 +123 -015 270019 019 /// /// 00\n\
         $$\n"
    );
}

#[test]
fn test_first_bin_aligned_to_clock_boundary() {
    let config = ConverterConfig::default();
    let text = to_text(&steady_rows(17..40));
    let lines = report_lines(&convert(&config, TimeWindow::default(), &text).text());

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("180015 "), "{}", lines[0]);
    assert!(lines[1].starts_with("180045 "), "{}", lines[1]);
}

#[test]
fn test_gap_produces_no_blank_lines() {
    let config = ConverterConfig::default();
    let text = to_text(&steady_rows((0..5).chain(600..605)));
    let lines = report_lines(&convert(&config, TimeWindow::default(), &text).text());

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("180015 "));
    assert!(lines[1].starts_with("181015 "));
}

#[test]
fn test_ten_second_interval() {
    let mut config = ConverterConfig::default();
    config.report.interval = ReportInterval::Ten;
    let text = to_text(&steady_rows(0..30));
    let lines = report_lines(&convert(&config, TimeWindow::default(), &text).text());

    let times: Vec<&str> = lines.iter().map(|l| &l[..6]).collect();
    assert_eq!(times, vec!["180005", "180015", "180025"]);
}

#[test]
fn test_input_order_does_not_matter() {
    let config = ConverterConfig::default();
    let rows = steady_rows(0..90);
    let mut reversed = rows.clone();
    reversed.reverse();

    let forward = convert(&config, TimeWindow::default(), &to_text(&rows)).text();
    let backward = convert(&config, TimeWindow::default(), &to_text(&reversed)).text();
    assert_eq!(forward, backward);
}

#[test]
fn test_pooled_and_sequential_parsers_agree() {
    let rows: Vec<Row> = (0..600)
        .map(|i| {
            let mut row = Row::steady(at(i));
            row.wspd = Some(5.0 + (i % 17) as f64 * 0.37);
            row.wdir = Some((i * 7 % 360) as f64);
            row.temp = (i % 5 != 0).then(|| 10.0 + (i % 11) as f64 * 0.1);
            row
        })
        .collect();
    let mut text = to_text(&rows);
    text.push_str("IWG1,not-a-time,1,2\nnoise line\n");

    let mut sequential = ConverterConfig::default();
    sequential.parse.workers = 1;
    let mut pooled = ConverterConfig::default();
    pooled.parse.workers = 6;

    let a = convert(&sequential, TimeWindow::default(), &text).text();
    let b = convert(&pooled, TimeWindow::default(), &text).text();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_peak_gust_scenario() {
    let speeds = [10.0; 3].into_iter().chain([20.0; 10]);
    let rows: Vec<Row> = speeds
        .enumerate()
        .map(|(i, s)| {
            let mut row = Row::steady(at(i as i64));
            row.wspd = Some(s);
            row
        })
        .collect();

    let config = ConverterConfig::default();
    let outcome = convert(&config, TimeWindow::default(), &to_text(&rows));
    let report = outcome.report().unwrap();

    let gust = report.observations[0].peak_gust_kt.unwrap();
    assert_abs_diff_eq!(gust, 38.877, epsilon = 0.01);

    let groups: Vec<&str> = report.lines[0].text.split(' ').collect();
    assert_eq!(groups[8], "270034");
    assert_eq!(groups[9], "039");
}

#[test]
fn test_negative_d_value_above_550_hpa_level() {
    let rows: Vec<Row> = (0..10)
        .map(|i| {
            let mut row = Row::steady(at(i));
            row.press = Some(350.0);
            row.gps_alt = Some(altitude_from_pressure(350.0) - 120.0);
            row.temp = None;
            row
        })
        .collect();

    let config = ConverterConfig::default();
    let lines = report_lines(&convert(&config, TimeWindow::default(), &to_text(&rows)).text());
    let groups: Vec<&str> = lines[0].split(' ').collect();

    assert_eq!(groups[3], "3500");
    assert_eq!(groups[5], "4880");
    assert_eq!(groups[6], "///");
}

#[test]
fn test_missing_fields_render_fill() {
    let rows: Vec<Row> = (0..10)
        .map(|i| {
            let mut row = Row::steady(at(i));
            row.gps_alt = None;
            row.press = None;
            row.dew = None;
            row.wdir = None;
            row
        })
        .collect();

    let config = ConverterConfig::default();
    let lines = report_lines(&convert(&config, TimeWindow::default(), &to_text(&rows)).text());

    assert_eq!(
        lines[0],
        "180015 2530N 08015W //// 03070 //// +123 /// ////// 019 /// /// 00"
    );
}

#[test]
fn test_half_metre_mean_rounds_to_even() {
    let rows: Vec<Row> = [3050.0, 3051.0]
        .iter()
        .enumerate()
        .map(|(i, &alt)| {
            let mut row = Row::steady(at(i as i64));
            row.gps_alt = Some(alt);
            row
        })
        .collect();

    let config = ConverterConfig::default();
    let lines = report_lines(&convert(&config, TimeWindow::default(), &to_text(&rows)).text());
    let groups: Vec<&str> = lines[0].split(' ').collect();

    assert_eq!(groups[4], "03050");
}

#[test]
fn test_messages_chunked_with_own_headers() {
    let config = ConverterConfig::default();
    let text = to_text(&steady_rows((0..45).map(|i| i * 30)));
    let outcome = convert(&config, TimeWindow::default(), &text);
    let report = outcome.report().unwrap();

    assert_eq!(report.messages.len(), 3);
    assert_eq!(report.messages[0].lines.len(), 20);
    assert_eq!(report.messages[2].lines.len(), 5);
    assert_eq!(report.messages[0].header, "URNT15 KNHC 151800");
    assert_eq!(report.messages[1].header, "URNT15 KNHC 151810");
    assert_eq!(report.messages[2].header, "URNT15 KNHC 151820");
    assert_eq!(
        report.messages[2].mission_line,
        "AF302 0915A HELENE HDOB 03 20240915"
    );

    let rendered = outcome.text();
    assert_eq!(rendered.matches("$$").count(), 3);
    assert_eq!(rendered.matches("\n\n").count(), 2);
    assert_eq!(decode_report(&rendered).len(), 45);
}

#[test]
fn test_no_rows_parsed_is_empty_output() {
    let config = ConverterConfig::default();
    let outcome = convert(&config, TimeWindow::default(), "header\nIWG1,garbage,1,2\n");
    assert!(matches!(outcome, Outcome::NoSamplesParsed));
    assert_eq!(outcome.text(), "");

    let outcome = convert(&config, TimeWindow::default(), "");
    assert!(matches!(outcome, Outcome::NoSamplesParsed));
}

#[test]
fn test_window_excluding_all_is_empty_output() {
    let config = ConverterConfig::default();
    let window = TimeWindow::new("20:00".parse().ok(), "21:00".parse().ok());
    let outcome = convert(&config, window, &to_text(&steady_rows(0..60)));

    assert!(matches!(outcome, Outcome::NoSamplesInWindow));
    assert_eq!(outcome.text(), "");
}

#[test]
fn test_window_wrapping_midnight() {
    // 23:59:00 .. 00:00:59 on the next day
    let rows = steady_rows(21_540..21_660);
    let start: TimeOfDay = "23:59:30".parse().unwrap();
    let end: TimeOfDay = "00:00:29".parse().unwrap();

    let config = ConverterConfig::default();
    let (outcome, summary) = Converter::new(&config, TimeWindow::new(Some(start), Some(end)))
        .convert_text(&to_text(&rows), MISSION, None);

    assert_eq!(summary.retained, 60);
    let report = outcome.report().unwrap();
    assert_eq!(report.lines.len(), 2);
    assert!(report.lines[0].text.starts_with("235945 "));
    assert!(report.lines[1].text.starts_with("000015 "));
    assert_eq!(
        report.mission.storm_date,
        NaiveDate::from_ymd_opt(2024, 9, 15).unwrap()
    );
    assert_eq!(report.messages[0].header, "URNT15 KNHC 152359");
}

#[test]
fn test_report_decodes_back() {
    let config = ConverterConfig::default();
    let text = convert(&config, TimeWindow::default(), &to_text(&steady_rows(0..30))).text();
    let decoded = decode_report(&text);

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].time, NaiveTime::from_hms_opt(18, 0, 15).unwrap());
    assert_abs_diff_eq!(decoded[0].lat.unwrap(), 25.5, epsilon = 1e-9);
    assert_abs_diff_eq!(decoded[0].lon.unwrap(), -80.25, epsilon = 1e-9);
    assert_eq!(decoded[0].wind, Some((270, 19)));
}

#[test]
fn test_position_round_trip_within_one_minute() {
    let mut lat = -89.9;
    while lat < 90.0 {
        let mut lon = -179.95;
        while lon < 180.0 {
            let back_lat = decode_latitude(&encode_latitude(Some(lat))).unwrap();
            let back_lon = decode_longitude(&encode_longitude(Some(lon))).unwrap();
            assert!((back_lat - lat).abs() <= 1.0 / 60.0, "lat {} -> {}", lat, back_lat);
            assert!((back_lon - lon).abs() <= 1.0 / 60.0, "lon {} -> {}", lon, back_lon);
            lon += 13.37;
        }
        lat += 7.13;
    }
}
