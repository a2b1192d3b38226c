pub fn render_index(target_activity_id: &str) -> String {
    INDEX_HTML.replace("{{ACTIVITY}}", target_activity_id)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Recurrence Grid</title>
  <style>
    :root {
      --ink: #1f2933;
      --muted: #7b8794;
      --line: #e4e7eb;
      --low: #d3dce6;
      --medium: #8fb8de;
      --high: #3e7cb1;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: #f7f9fb;
      color: var(--ink);
      font-family: "Helvetica Neue", Arial, sans-serif;
      padding: 40px 24px;
    }

    .page {
      max-width: 960px;
      margin: 0 auto;
      display: grid;
      gap: 20px;
    }

    h1 {
      margin: 0;
      font-size: 1.6rem;
      font-weight: 600;
      letter-spacing: 0.02em;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
      word-break: break-all;
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c0392b;
    }

    .grid-card {
      background: white;
      border: 1px solid var(--line);
      border-radius: 10px;
      overflow-x: auto;
      box-shadow: 0 8px 24px rgba(31, 41, 51, 0.06);
    }

    table {
      border-collapse: collapse;
      width: 100%;
      min-width: 760px;
    }

    th, td {
      border: 1px solid var(--line);
      font-size: 0.8rem;
    }

    th {
      background: #fafbfc;
      padding: 10px 8px;
      font-weight: 600;
      color: var(--ink);
    }

    td.slot-label {
      background: #fafbfc;
      color: var(--muted);
      padding: 0 10px;
      width: 90px;
      font-weight: 500;
      white-space: nowrap;
    }

    td.cell {
      height: 40px;
      padding: 2px;
      vertical-align: top;
    }

    .block {
      border-radius: 4px;
      height: 100%;
      min-height: 34px;
      margin-bottom: 2px;
      cursor: default;
    }

    .block.low { background: var(--low); }
    .block.medium { background: var(--medium); }
    .block.high { background: var(--high); }

    .legend {
      display: flex;
      gap: 18px;
      font-size: 0.8rem;
      color: var(--muted);
      align-items: center;
    }

    .legend .swatch {
      display: inline-block;
      width: 14px;
      height: 14px;
      border-radius: 3px;
      margin-right: 6px;
      vertical-align: -2px;
    }
  </style>
</head>
<body>
  <main class="page">
    <header>
      <h1>Weekly Recurrence Grid</h1>
      <p class="subtitle">Activity {{ACTIVITY}}</p>
    </header>

    <div class="legend">
      <span><span class="swatch" style="background: var(--low)"></span>low</span>
      <span><span class="swatch" style="background: var(--medium)"></span>medium</span>
      <span><span class="swatch" style="background: var(--high)"></span>high</span>
    </div>

    <div class="grid-card">
      <table id="grid" aria-label="Weekly recurrence grid"></table>
    </div>

    <div class="status" id="status">Loading grid...</div>
  </main>

  <script>
    const gridEl = document.getElementById('grid');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const timeLabel = (startTime) => {
      const date = new Date(startTime);
      if (Number.isNaN(date.getTime())) {
        return startTime;
      }
      return date.toISOString().slice(11, 16);
    };

    const renderGrid = (grid) => {
      const thead = document.createElement('thead');
      const headRow = document.createElement('tr');
      headRow.appendChild(document.createElement('th'));
      grid.days.forEach((day) => {
        const th = document.createElement('th');
        th.textContent = day.label;
        headRow.appendChild(th);
      });
      thead.appendChild(headRow);

      const tbody = document.createElement('tbody');
      grid.rows.forEach((row) => {
        const tr = document.createElement('tr');
        const label = document.createElement('td');
        label.className = 'slot-label';
        label.textContent = row.slot;
        tr.appendChild(label);

        row.cells.forEach((cell) => {
          const td = document.createElement('td');
          td.className = 'cell';
          cell.forEach((entry) => {
            const block = document.createElement('div');
            block.className = `block ${entry.repeatability}`;
            const name = entry.note || 'Activity';
            block.title = `${name} - ${timeLabel(entry.start_time)} (${entry.repeatability} repeatability)`;
            td.appendChild(block);
          });
          tr.appendChild(td);
        });
        tbody.appendChild(tr);
      });

      gridEl.replaceChildren(thead, tbody);
    };

    const load = async () => {
      const res = await fetch('/api/grid');
      if (!res.ok) {
        const message = await res.text();
        throw new Error(message || `Request failed with ${res.status}`);
      }
      const grid = await res.json();
      renderGrid(grid);
      const skipped = grid.skipped_count > 0 ? `, ${grid.skipped_count} skipped` : '';
      setStatus(`${grid.matched_count} matching records${skipped}.`, 'ok');
    };

    load().catch((err) => setStatus(`Error: ${err.message}`, 'error'));
  </script>
</body>
</html>
"#;
