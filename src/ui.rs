pub fn render_index(date: &str, entry_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{COUNT}}", &entry_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Bus Punctuality Tracker</title>
  <style>
    :root {
      --bg: #eef3f8;
      --ink: #1f2933;
      --muted: #64748b;
      --late: #d9480f;
      --early: #1971c2;
      --card: #ffffff;
      --line: rgba(31, 41, 51, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(180deg, #dbe7f3, var(--bg) 45%);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: start center;
      padding: 36px 16px 56px;
    }

    .app {
      width: min(840px, 100%);
      display: grid;
      gap: 20px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.7rem, 3.5vw, 2.3rem);
    }

    header .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 20px;
      box-shadow: 0 10px 30px rgba(31, 41, 51, 0.08);
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: end;
    }

    .field {
      display: grid;
      gap: 4px;
    }

    .field label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .field input {
      border: 1px solid var(--line);
      border-radius: 8px;
      padding: 9px 10px;
      font-size: 1rem;
      font-family: inherit;
    }

    button {
      border: none;
      border-radius: 8px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      background: #e2e8f0;
      color: var(--ink);
    }

    button.primary {
      background: var(--late);
      color: white;
    }

    button:active {
      transform: translateY(1px);
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
    }

    .metric .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .metric .value {
      display: block;
      margin-top: 4px;
      font-size: 1.4rem;
      font-weight: 600;
    }

    .view-header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 10px;
      margin-bottom: 12px;
    }

    .view-header h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .tabs button {
      background: transparent;
      color: var(--muted);
      padding: 7px 12px;
    }

    .tabs button.active {
      background: var(--ink);
      color: white;
    }

    #chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    .trend-line {
      fill: none;
      stroke: var(--late);
      stroke-width: 2.5;
    }

    .trend-point {
      fill: white;
      stroke: var(--late);
      stroke-width: 2;
    }

    .grid-line {
      stroke: var(--line);
    }

    .zero-line {
      stroke: var(--early);
      stroke-dasharray: 5 5;
    }

    .axis-label {
      fill: var(--muted);
      font-size: 11px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    th, td {
      text-align: left;
      padding: 8px 10px;
      border-bottom: 1px solid var(--line);
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    td.early { color: var(--early); }
    td.late { color: var(--late); }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status[data-type="error"] { color: #c0392b; }
    .status[data-type="ok"] { color: #2d7a4b; }

    .hint {
      margin: 0;
      font-size: 0.85rem;
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Bus Punctuality Tracker</h1>
      <p class="subtitle">Today is {{DATE}} &middot; {{COUNT}} arrivals logged so far.</p>
    </header>

    <section class="card">
      <div class="controls">
        <div class="field">
          <label for="predicted">Predicted arrival</label>
          <input id="predicted" type="time" />
        </div>
        <div class="field">
          <label for="entry-date">Date (optional)</label>
          <input id="entry-date" type="date" />
        </div>
        <button class="primary" id="arrived-btn" type="button">Bus arrived</button>
        <button id="delete-btn" type="button">Undo last</button>
        <button id="export-btn" type="button">Export CSV</button>
      </div>
      <p class="hint">The arrival time is taken from the clock when you press the button; the predicted time is what the timetable promised.</p>
    </section>

    <section class="metrics">
      <div class="card metric">
        <span class="label">Entries</span>
        <span class="value" id="metric-entries">0</span>
      </div>
      <div class="card metric">
        <span class="label">Days tracked</span>
        <span class="value" id="metric-days">0</span>
      </div>
      <div class="card metric">
        <span class="label">Average offset</span>
        <span class="value" id="metric-avg">&ndash;</span>
      </div>
    </section>

    <section class="card">
      <div class="view-header">
        <h2 id="view-title">Per entry</h2>
        <div class="tabs" role="tablist">
          <button class="active" type="button" data-mode="raw" role="tab" aria-selected="true">Per entry</button>
          <button type="button" data-mode="dailyAverage" role="tab" aria-selected="false">Daily average</button>
        </div>
      </div>
      <svg id="chart" viewBox="0 0 640 240" role="img" aria-label="Punctuality trend"></svg>
    </section>

    <section class="card">
      <table>
        <thead id="table-head"></thead>
        <tbody id="table-body"></tbody>
      </table>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const predictedInput = document.getElementById('predicted');
    const dateInput = document.getElementById('entry-date');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const tableHead = document.getElementById('table-head');
    const tableBody = document.getElementById('table-body');
    const viewTitle = document.getElementById('view-title');
    const tabs = Array.from(document.querySelectorAll('.tabs button'));

    let mode = 'raw';
    let entriesData = null;
    let seriesData = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"]/g, (c) =>
        ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' }[c]));

    const drawChart = (labels, values) => {
      if (!labels.length) {
        chartEl.innerHTML = '<text class="axis-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 640;
      const height = 240;
      const padX = 46;
      const padBottom = 30;
      const padTop = 18;

      let lo = Math.min(0, ...values);
      let hi = Math.max(0, ...values);
      if (lo === hi) {
        lo -= 1;
        hi += 1;
      }
      const span = hi - lo;

      const stepX = labels.length > 1 ? (width - padX * 2) / (labels.length - 1) : 0;
      const px = (i) => padX + i * stepX;
      const py = (v) => height - padBottom - ((v - lo) / span) * (height - padTop - padBottom);

      let svg = '';
      for (let tick = 0; tick <= 4; tick += 1) {
        const value = lo + (span * tick) / 4;
        const yPos = py(value);
        svg += `<line class="grid-line" x1="${padX}" y1="${yPos}" x2="${width - padX}" y2="${yPos}" />`;
        svg += `<text class="axis-label" x="${padX - 8}" y="${yPos + 4}" text-anchor="end">${value.toFixed(Number.isInteger(value) ? 0 : 1)}</text>`;
      }
      svg += `<line class="zero-line" x1="${padX}" y1="${py(0)}" x2="${width - padX}" y2="${py(0)}" />`;

      const path = values
        .map((v, i) => `${i === 0 ? 'M' : 'L'} ${px(i).toFixed(1)} ${py(v).toFixed(1)}`)
        .join(' ');
      svg += `<path class="trend-line" d="${path}" />`;

      values.forEach((v, i) => {
        svg += `<circle class="trend-point" cx="${px(i)}" cy="${py(v)}" r="3.5" />`;
      });

      const every = labels.length > 10 ? Math.ceil(labels.length / 10) : 1;
      labels.forEach((label, i) => {
        if (i % every !== 0) return;
        svg += `<text class="axis-label" x="${px(i)}" y="${height - padBottom + 16}" text-anchor="middle">${escapeHtml(label.slice(5))}</text>`;
      });

      chartEl.innerHTML = svg;
    };

    const renderTable = () => {
      if (mode === 'raw') {
        tableHead.innerHTML = '<tr><th>Date</th><th>Predicted</th><th>Actual</th><th>Diff</th></tr>';
        tableBody.innerHTML = entriesData.rows
          .map((row) => `<tr>
            <td>${escapeHtml(row.date)}</td>
            <td>${escapeHtml(row.predicted)}</td>
            <td>${escapeHtml(row.actual)}</td>
            <td class="${row.diff < 0 ? 'early' : 'late'}">${escapeHtml(row.diff_label)}</td>
          </tr>`)
          .join('');
      } else {
        tableHead.innerHTML = '<tr><th>Date</th><th>Average Difference</th></tr>';
        tableBody.innerHTML = seriesData.labels
          .map((label, i) => {
            const avg = seriesData.values[i];
            return `<tr>
              <td>${escapeHtml(label)}</td>
              <td class="${avg < 0 ? 'early' : 'late'}">${avg.toFixed(1)} min</td>
            </tr>`;
          })
          .join('');
      }
    };

    const renderAll = () => {
      if (!entriesData || !seriesData) return;
      viewTitle.textContent = mode === 'raw' ? 'Per entry' : 'Daily average';
      document.getElementById('metric-entries').textContent = entriesData.summary.entries;
      document.getElementById('metric-days').textContent = entriesData.summary.days;
      document.getElementById('metric-avg').textContent =
        entriesData.summary.entries ? entriesData.summary.avg_label : '–';
      drawChart(seriesData.labels, seriesData.values);
      renderTable();
    };

    const refresh = async () => {
      const [entriesRes, seriesRes] = await Promise.all([
        fetch('/api/entries'),
        fetch(`/api/series?mode=${mode}`)
      ]);
      if (!entriesRes.ok || !seriesRes.ok) {
        throw new Error('unable to load data');
      }
      entriesData = await entriesRes.json();
      seriesData = await seriesRes.json();
      renderAll();
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'request failed');
      }
      return res.json();
    };

    document.getElementById('arrived-btn').addEventListener('click', () => {
      const predicted = predictedInput.value;
      if (!predicted) {
        setStatus('Enter predicted time first.', 'error');
        return;
      }
      post('/api/record', { predicted, date: dateInput.value || null })
        .then(() => {
          predictedInput.value = '';
          dateInput.value = '';
          setStatus('Saved', 'ok');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('delete-btn').addEventListener('click', () => {
      post('/api/delete-last')
        .then(() => {
          setStatus('Last entry removed', 'ok');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('export-btn').addEventListener('click', () => {
      window.location.href = `/api/export?mode=${mode}`;
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        mode = button.dataset.mode;
        tabs.forEach((b) => {
          const active = b === button;
          b.classList.toggle('active', active);
          b.setAttribute('aria-selected', String(active));
        });
        refresh().catch((err) => setStatus(err.message, 'error'));
      });
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
