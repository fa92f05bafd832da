// src/api/page.rs
// Single-page UI served at GET /

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>AI Indian Legal Document Summarizer</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
  aside { border: 1px solid #ddd; border-radius: 6px; padding: 0.75rem 1rem; margin-bottom: 1rem; }
  textarea { width: 100%; height: 250px; }
  .error { color: #b00020; }
  .hidden { display: none; }
</style>
</head>
<body>
<h1>📜 AI Indian Legal Document Summarizer</h1>
<h5>✨ Summarize complex legal documents into simple, easy-to-understand bullet points.</h5>

<aside>
  <h3>⚙️ Settings</h3>
  <label><input type="radio" name="method" value="paste" checked> Paste Text</label>
  <label><input type="radio" name="method" value="upload"> Upload File</label>
  <p>
    <label for="bullets">Number of bullet points: <output id="bullets-value">5</output></label><br>
    <input type="range" id="bullets" min="3" max="10" value="5">
  </p>
</aside>

<div id="paste-input">
  <label for="text">Paste your legal document here:</label>
  <textarea id="text"></textarea>
</div>
<div id="upload-input" class="hidden">
  <label for="file">Upload a TXT or PDF file</label>
  <input type="file" id="file" accept=".txt,.pdf">
</div>

<p><button id="go">🚀 Summarize</button> <span id="busy" class="hidden">Generating summary...</span></p>
<p id="error" class="error"></p>

<section id="result" class="hidden">
  <h3>📋 Simplified Summary:</h3>
  <ul id="bullet-list"></ul>
  <button id="download">📥 Download Summary as .txt</button>
</section>

<script>
const $ = (id) => document.getElementById(id);
let lastBullets = [];

document.querySelectorAll('input[name="method"]').forEach((radio) => {
  radio.addEventListener('change', () => {
    const upload = radio.value === 'upload' && radio.checked;
    $('paste-input').classList.toggle('hidden', upload);
    $('upload-input').classList.toggle('hidden', !upload);
  });
});
$('bullets').addEventListener('input', () => { $('bullets-value').textContent = $('bullets').value; });

$('go').addEventListener('click', async () => {
  $('error').textContent = '';
  $('result').classList.add('hidden');
  const numBullets = parseInt($('bullets').value, 10);
  const method = document.querySelector('input[name="method"]:checked').value;

  let request;
  if (method === 'paste') {
    request = fetch('/summarize', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ text: $('text').value, num_bullets: numBullets }),
    });
  } else {
    const form = new FormData();
    if ($('file').files.length > 0) form.append('file', $('file').files[0]);
    request = fetch('/summarize/upload?num_bullets=' + numBullets, { method: 'POST', body: form });
  }

  $('busy').classList.remove('hidden');
  try {
    const res = await request;
    const data = await res.json();
    if (data.status !== 'success') {
      $('error').textContent = '⚠️ ' + data.message;
      return;
    }
    lastBullets = data.bullets;
    $('bullet-list').replaceChildren(...data.bullets.map((b) => {
      const li = document.createElement('li');
      li.textContent = b;
      return li;
    }));
    $('result').classList.remove('hidden');
  } catch (e) {
    $('error').textContent = '⚠️ ' + e;
  } finally {
    $('busy').classList.add('hidden');
  }
});

$('download').addEventListener('click', async () => {
  const res = await fetch('/summarize/download', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ bullets: lastBullets }),
  });
  const url = URL.createObjectURL(await res.blob());
  const a = document.createElement('a');
  a.href = url;
  a.download = 'legal_summary.txt';
  a.click();
  URL.revokeObjectURL(url);
});
</script>
</body>
</html>
"#;
