use crate::models::{DashboardView, StatusFilter, SummaryCounts};
use num_format::{Locale, ToFormattedString};

pub fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Renders the page. `view_json` is the serialised initial [`DashboardView`].
pub fn render_index(view: &DashboardView, view_json: &str) -> String {
    let SummaryCounts {
        total,
        active,
        recovered,
        deceased,
    } = view.summary;

    INDEX_HTML
        .replace("{{TOTAL}}", &format_count(total))
        .replace("{{DECEASED}}", &format_count(deceased))
        .replace("{{RECOVERED}}", &format_count(recovered))
        .replace("{{ACTIVE}}", &format_count(active))
        .replace("{{OPTIONS}}", &render_options(view.filter))
        .replace("{{INITIAL_VIEW}}", &script_safe(view_json))
}

fn render_options(selected: StatusFilter) -> String {
    StatusFilter::ALL
        .iter()
        .map(|filter| {
            let marker = if *filter == selected { " selected" } else { "" };
            format!(r#"<option value="{filter}"{marker}>{filter}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

// Region names come from the CSV and end up inside a <script> block.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\!--")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>COVID-19 Pandemic Dashboard</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
  <style>
    :root {
      --bg: #f4f6f9;
      --ink: #212529;
      --muted: #6c757d;
      --card: #ffffff;
      --primary: #007bff;
      --danger: #dc3545;
      --success: #28a745;
      --warning: #e0a800;
      --shadow: 0 2px 6px rgba(33, 37, 41, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    }

    .container {
      width: min(1140px, 100%);
      margin: 0 auto;
      padding: 32px 16px 48px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      text-align: center;
      font-size: clamp(1.8rem, 3.5vw, 2.5rem);
      font-weight: 500;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .card {
      background: var(--card);
      border-radius: 6px;
      border: 1px solid rgba(0, 0, 0, 0.125);
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .card h3 {
      margin: 0 0 8px;
      font-size: 1.5rem;
      font-weight: 500;
    }

    .card h4 {
      margin: 0 0 8px;
      font-size: 1.5rem;
      font-weight: 500;
    }

    .card p {
      margin: 0;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .text-primary { color: var(--primary); }
    .text-danger { color: var(--danger); }
    .text-success { color: var(--success); }
    .text-warning { color: var(--warning); }

    .charts {
      display: grid;
      gap: 16px;
    }

    select {
      width: 100%;
      padding: 8px 12px;
      font-size: 1rem;
      border: 1px solid #ced4da;
      border-radius: 4px;
      background: white;
    }

    .chart {
      background: var(--card);
      border-radius: 6px;
      box-shadow: var(--shadow);
      min-height: 500px;
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }
  </style>
</head>
<body>
  <main class="container">
    <h1>COVID-19 Pandemic Dashboard</h1>

    <section class="cards">
      <div class="card">
        <h3 class="text-primary">Total Cases</h3>
        <h4 id="total-cases">{{TOTAL}}</h4>
        <p>Total reported cases</p>
      </div>
      <div class="card">
        <h3 class="text-danger">Deaths</h3>
        <h4 id="deaths">{{DECEASED}}</h4>
        <p>Total deceased cases</p>
      </div>
      <div class="card">
        <h3 class="text-success">Recovered</h3>
        <h4 id="recovered">{{RECOVERED}}</h4>
        <p>Total recovered cases</p>
      </div>
      <div class="card">
        <h3 class="text-warning">Active Cases</h3>
        <h4 id="active-cases">{{ACTIVE}}</h4>
        <p>Currently hospitalized</p>
      </div>
    </section>

    <section class="charts">
      <select id="status-dropdown" aria-label="Patient status">
          {{OPTIONS}}
      </select>
      <div class="status" id="status"></div>
      <div id="pie-chart" class="chart"></div>
      <div id="bar-chart" class="chart"></div>
    </section>
  </main>

  <script>
    const initialView = {{INITIAL_VIEW}};
    const dropdown = document.getElementById('status-dropdown');
    const statusEl = document.getElementById('status');
    const plotConfig = { responsive: true, displaylogo: false };

    let latestRequest = 0;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const render = (view) => {
      Plotly.react('pie-chart', view.charts.pie.data, view.charts.pie.layout, plotConfig);
      Plotly.react('bar-chart', view.charts.bar.data, view.charts.bar.layout, plotConfig);
      if (!view.breakdown.length) {
        setStatus(`No ${view.filter} cases in the dataset.`, 'info');
      }
    };

    const fetchView = async (status) => {
      const res = await fetch(`/api/breakdown?status=${encodeURIComponent(status)}`);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Unable to load breakdown');
      }
      return res.json();
    };

    // Only the newest request may touch the page, whether it succeeds or fails.
    const load = async (status) => {
      const request = ++latestRequest;
      try {
        const view = await fetchView(status);
        if (request === latestRequest) {
          setStatus('', '');
          render(view);
        }
      } catch (err) {
        if (request === latestRequest) {
          setStatus(err.message, 'error');
        }
      }
    };

    dropdown.addEventListener('change', () => {
      const status = dropdown.value;
      const url = status === 'All' ? '/' : `/?status=${encodeURIComponent(status)}`;
      history.replaceState(null, '', url);
      setStatus('Loading...', 'info');
      load(status);
    });

    render(initialView);
  </script>
</body>
</html>
"#;
