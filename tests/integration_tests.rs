use anyhow::Result;
use gitgraphed::config::settings::{ScraperSettings, DEFAULT_ACCEPT, DEFAULT_USER_AGENT};
use gitgraphed::core::output::encode_graph;
use gitgraphed::{
    ContribLevel, ContributionPipeline, FileSink, GraphEngine, GraphError, HttpSource,
    RegexExtractor, RunConfig,
};
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

const SYNTHETIC_PAGE: &str = r#"<!DOCTYPE html>
<div class="js-yearly-contributions">
  <h2 id="js-contribution-activity-description" class="f4 text-normal mb-2">
    42 contributions in the last year
  </h2>
  <table class="ContributionCalendar-grid js-calendar-graph-table">
    <tbody>
      <tr style="height: 10px">
        <td tabindex="-1" data-ix="0" aria-selected="false" aria-describedby="contribution-graph-legend-level-0" style="width: 10px" data-date="2024-03-01" id="contribution-day-component-5-9" data-level="0" role="gridcell" data-view-component="true" class="ContributionCalendar-day">No contributions</td>
        <td tabindex="-1" data-ix="1" aria-selected="false" aria-describedby="contribution-graph-legend-level-3" style="width: 10px" data-date="2024-03-02" id="contribution-day-component-6-9" data-level="3" role="gridcell" data-view-component="true" class="ContributionCalendar-day">7 contributions</td>
      </tr>
    </tbody>
  </table>
</div>"#;

fn settings_for(server: &MockServer) -> ScraperSettings {
    let mut settings = ScraperSettings::default();
    settings.http.base_url = server.base_url();
    settings
}

fn engine_for(
    config: RunConfig,
) -> Result<GraphEngine<ContributionPipeline<HttpSource<RunConfig>, RegexExtractor, RunConfig>>> {
    let source = HttpSource::new(config.clone())?;
    let pipeline = ContributionPipeline::new(source, RegexExtractor::new()?, config);
    Ok(GraphEngine::new(pipeline))
}

#[tokio::test]
async fn test_end_to_end_contribution_graph() -> Result<()> {
    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/octocat/contributions")
                .query_param("from", "2024-01-01")
                .query_param("to", "2024-12-31");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(SYNTHETIC_PAGE);
        })
        .await;

    let config = RunConfig::new("octocat", 2024, settings_for(&server));
    let graph = engine_for(config)?.run().await?;

    page_mock.assert_async().await;
    assert_eq!(graph.username, "octocat");
    assert_eq!(graph.total_contributions, 42);
    assert_eq!(graph.years, vec![2024]);
    assert_eq!(graph.days.len(), 2);
    assert_eq!(graph.days[0].date.to_string(), "2024-03-01");
    assert_eq!(graph.days[1].date.to_string(), "2024-03-02");
    assert_eq!(
        graph.days.iter().map(|d| d.count).collect::<Vec<_>>(),
        vec![0, 7]
    );
    assert_eq!(
        graph.days.iter().map(|d| d.contrib_level).collect::<Vec<_>>(),
        vec![ContribLevel::None, ContribLevel::ThirdQuartile]
    );
    assert_eq!(graph.days[0].day_of_week, 5);
    assert_eq!(graph.days[1].day_of_week, 6);
    assert_eq!(graph.days[0].week_of_year, 9);

    let json: serde_json::Value = serde_json::from_slice(&encode_graph(&graph)?)?;
    assert_eq!(json["totalContributions"], 42);
    assert_eq!(json["days"][1]["contribLevel"], "third_quartile");
    assert_eq!(json["days"][0]["dayOfWeek"], 5);
    Ok(())
}

#[tokio::test]
async fn test_request_carries_browser_headers() -> Result<()> {
    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/octocat/contributions")
                .header("user-agent", DEFAULT_USER_AGENT)
                .header("accept", DEFAULT_ACCEPT);
            then.status(200).body(SYNTHETIC_PAGE);
        })
        .await;

    let config = RunConfig::new("octocat", 2024, settings_for(&server));
    engine_for(config)?.run().await?;

    page_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_not_found_propagates_status_and_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("graph.json");

    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/users/ghost/contributions");
            then.status(404).body("Not Found");
        })
        .await;

    let config = RunConfig::new("ghost", 2024, settings_for(&server));
    let result = engine_for(config)?
        .run_into(&FileSink::new(&output_path))
        .await;

    page_mock.assert_async().await;
    let err = result.unwrap_err();
    assert!(matches!(err, GraphError::HttpStatus { status: 404 }));
    assert!(err.to_string().contains("404"));
    assert!(!output_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_page_without_graph_is_empty_result() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/contributions");
            then.status(200).body("<html><body>Nothing to see</body></html>");
        })
        .await;

    let config = RunConfig::new("octocat", 2023, settings_for(&server));
    let graph = engine_for(config)?.run().await?;

    assert_eq!(graph.total_contributions, 0);
    assert!(graph.days.is_empty());
    assert_eq!(graph.years, vec![2023]);
    Ok(())
}

#[tokio::test]
async fn test_successful_run_writes_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("graph.json");

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/contributions");
            then.status(200).body(SYNTHETIC_PAGE);
        })
        .await;

    let config = RunConfig::new("octocat", 2024, settings_for(&server));
    engine_for(config)?
        .run_into(&FileSink::new(&output_path))
        .await?;

    let written = std::fs::read_to_string(&output_path)?;
    assert!(written.starts_with("{\n  \"username\": \"octocat\",\n  \"totalContributions\": 42,"));
    assert!(written.ends_with("}\n"));
    Ok(())
}

#[tokio::test]
async fn test_slow_response_hits_timeout() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/octocat/contributions");
            then.status(200)
                .delay(Duration::from_secs(3))
                .body(SYNTHETIC_PAGE);
        })
        .await;

    let mut settings = settings_for(&server);
    settings.http.timeout_secs = 1;
    let config = RunConfig::new("octocat", 2024, settings);

    let err = engine_for(config)?.run().await.unwrap_err();
    assert!(matches!(err, GraphError::Transport(_)));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() -> Result<()> {
    let mut settings = ScraperSettings::default();
    settings.http.base_url = "http://127.0.0.1:1".to_string();
    let config = RunConfig::new("octocat", 2024, settings);

    let err = engine_for(config)?.run().await.unwrap_err();
    assert!(matches!(err, GraphError::Transport(_)));
    Ok(())
}
