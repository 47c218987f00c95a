use crate::models::{DashboardView, MOODS, Mood};

pub fn render_index(view: &DashboardView) -> String {
    let buttons: String = MOODS.iter().map(mood_button).collect();
    INDEX_HTML
        .replace("{{DATE}}", &escape_html(&view.date_heading))
        .replace("{{TOTAL}}", &view.total_count.to_string())
        .replace("{{STREAK}}", &escape_html(&view.streak_label))
        .replace("{{MOOD_BUTTONS}}", &buttons)
}

fn mood_button(mood: &Mood) -> String {
    format!(
        r#"<button type="button" class="mood-btn" data-mood="{code}" style="--mood-color: {color}">
          <span class="emoji">{emoji}</span>
          <span class="label">{label}</span>
        </button>
        "#,
        code = escape_html(mood.mood),
        color = escape_html(mood.color),
        emoji = escape_html(mood.emoji),
        label = escape_html(mood.label),
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #6b6a66;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", serif;
      margin: 0;
      font-size: 2.2rem;
    }

    .date {
      color: var(--muted);
      margin-top: 6px;
    }

    .moods {
      display: grid;
      grid-template-columns: repeat(5, 1fr);
      gap: 12px;
    }

    .mood-btn {
      border: 2px solid transparent;
      border-radius: 18px;
      background: #fff;
      padding: 14px 6px;
      display: grid;
      gap: 6px;
      justify-items: center;
      cursor: pointer;
      font: inherit;
      transition: transform 150ms ease, border-color 150ms ease;
    }

    .mood-btn .emoji {
      font-size: 2rem;
    }

    .mood-btn.selected {
      border-color: var(--mood-color);
      transform: translateY(-3px);
    }

    textarea {
      width: 100%;
      min-height: 80px;
      border-radius: 16px;
      border: 1px solid #e3ddd2;
      padding: 12px 14px;
      font: inherit;
      resize: vertical;
    }

    .primary {
      border: none;
      border-radius: 999px;
      background: var(--accent);
      color: #fff;
      padding: 12px 26px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
    }

    .stats {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 14px;
    }

    .stat {
      background: #fff;
      border-radius: 18px;
      padding: 16px 18px;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .history-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .history-header h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .link {
      border: none;
      background: none;
      color: var(--accent);
      cursor: pointer;
      font: inherit;
    }

    .history {
      display: grid;
      gap: 10px;
    }

    .history-item {
      display: flex;
      justify-content: space-between;
      align-items: center;
      background: #fff;
      border-radius: 14px;
      border-left: 6px solid #fff;
      padding: 12px 14px;
    }

    .history-left {
      display: flex;
      gap: 12px;
      align-items: center;
    }

    .history-emoji {
      font-size: 1.6rem;
    }

    .history-date {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .empty-state {
      color: var(--muted);
      text-align: center;
      padding: 18px;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c0392b;
    }

    @media (max-width: 560px) {
      .moods {
        grid-template-columns: repeat(3, 1fr);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>How are you feeling?</h1>
      <div class="date" id="currentDate">{{DATE}}</div>
    </header>

    <section class="moods">
        {{MOOD_BUTTONS}}
    </section>

    <section>
      <textarea id="moodNote" placeholder="Add a note (optional)"></textarea>
    </section>

    <div>
      <button type="button" class="primary" id="saveMoodBtn">Save Mood</button>
      <div class="status" id="status"></div>
    </div>

    <section class="stats">
      <div class="stat">
        <div>Current streak</div>
        <div class="value" id="streakCount">{{STREAK}}</div>
      </div>
      <div class="stat">
        <div>Total logs</div>
        <div class="value" id="totalLogs">{{TOTAL}}</div>
      </div>
    </section>

    <section>
      <div class="history-header">
        <h2>History</h2>
        <button type="button" class="link" id="clearHistoryBtn">Clear history</button>
      </div>
      <div class="history" id="historyList"></div>
    </section>
  </main>

  <script>
    const moodBtns = document.querySelectorAll('.mood-btn');
    const noteEl = document.getElementById('moodNote');
    const saveBtn = document.getElementById('saveMoodBtn');
    const clearBtn = document.getElementById('clearHistoryBtn');
    const historyEl = document.getElementById('historyList');
    const streakEl = document.getElementById('streakCount');
    const totalEl = document.getElementById('totalLogs');
    const dateEl = document.getElementById('currentDate');
    const statusEl = document.getElementById('status');

    let selectedMood = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const el = (tag, className, text) => {
      const node = document.createElement(tag);
      if (className) {
        node.className = className;
      }
      if (text !== undefined) {
        node.textContent = text;
      }
      return node;
    };

    const render = (view) => {
      dateEl.textContent = view.date_heading;
      streakEl.textContent = view.streak_label;
      totalEl.textContent = view.total_count;

      historyEl.replaceChildren();
      if (view.empty_message) {
        historyEl.appendChild(el('div', 'empty-state', view.empty_message));
        return;
      }

      view.entries.forEach((item) => {
        const row = el('div', 'history-item');
        row.style.borderLeftColor = item.color;

        const left = el('div', 'history-left');
        left.appendChild(el('span', 'history-emoji', item.emoji));
        const details = el('div', 'history-details');
        details.appendChild(el('div', 'history-date', `${item.date_label} at ${item.time_label}`));
        details.appendChild(el('div', 'history-note', item.text));
        left.appendChild(details);

        const del = el('button', 'link', 'Delete');
        del.type = 'button';
        del.addEventListener('click', (event) => {
          event.stopPropagation();
          request(`/api/entries/${item.id}`, { method: 'DELETE' })
            .catch((err) => setStatus(err.message, 'error'));
        });

        row.appendChild(left);
        row.appendChild(del);
        historyEl.appendChild(row);
      });
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      const view = await res.json();
      render(view);
      return view;
    };

    const resetForm = () => {
      selectedMood = null;
      moodBtns.forEach((b) => b.classList.remove('selected'));
      noteEl.value = '';
    };

    moodBtns.forEach((btn) => {
      btn.addEventListener('click', () => {
        moodBtns.forEach((b) => b.classList.remove('selected'));
        btn.classList.add('selected');
        selectedMood = btn.dataset.mood;
      });
    });

    saveBtn.addEventListener('click', () => {
      if (!selectedMood) {
        alert('Please select a mood first!');
        return;
      }
      request('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ mood: selectedMood, note: noteEl.value })
      })
        .then(() => {
          resetForm();
          setStatus('', '');
          const original = saveBtn.textContent;
          saveBtn.textContent = 'Saved! 🎉';
          setTimeout(() => {
            saveBtn.textContent = original;
          }, 2000);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    clearBtn.addEventListener('click', () => {
      if (confirm('Are you sure you want to clear your mood history?')) {
        request('/api/entries', { method: 'DELETE' })
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    request('/api/entries').catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
