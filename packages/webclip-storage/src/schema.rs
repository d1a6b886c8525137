/// Bootstrap DDL. Every statement is idempotent; [`crate::db::Db::ensure_schema`]
/// replays the whole script under an advisory lock on startup.
pub const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS memories (
	id UUID PRIMARY KEY,
	url TEXT NOT NULL,
	title TEXT NOT NULL,
	content_type VARCHAR(50) NOT NULL CHECK (content_type IN ('page', 'selection', 'video_timestamp', 'links', 'custom')),
	content TEXT,
	selected_text TEXT,
	context_before TEXT,
	context_after TEXT,
	full_context TEXT,
	element_type VARCHAR(50),
	page_section VARCHAR(50),
	xpath TEXT,
	tags TEXT,
	notes TEXT,
	created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
	updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
	scraped_at TIMESTAMPTZ NOT NULL,
	video_platform VARCHAR(50),
	video_timestamp BIGINT,
	video_duration BIGINT,
	video_title TEXT,
	video_url TEXT,
	thumbnail_url TEXT,
	formatted_timestamp VARCHAR(20)
);

CREATE TABLE IF NOT EXISTS links (
	id BIGSERIAL PRIMARY KEY,
	memory_id UUID NOT NULL REFERENCES memories(id) ON DELETE CASCADE,
	text TEXT,
	href TEXT NOT NULL,
	link_title TEXT,
	created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS items (
	id BIGSERIAL PRIMARY KEY,
	title TEXT NOT NULL,
	description TEXT NOT NULL DEFAULT '',
	status VARCHAR(50) NOT NULL,
	priority VARCHAR(50) NOT NULL,
	created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
	updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS scraped_data (
	id BIGSERIAL PRIMARY KEY,
	user_id TEXT NOT NULL,
	url TEXT NOT NULL,
	title TEXT NOT NULL,
	content TEXT NOT NULL,
	metadata JSONB NOT NULL DEFAULT '{}'::jsonb,
	tags TEXT NOT NULL DEFAULT '',
	created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
	updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS idx_memories_url ON memories(url);

CREATE INDEX IF NOT EXISTS idx_memories_content_type ON memories(content_type);

CREATE INDEX IF NOT EXISTS idx_memories_created_at ON memories(created_at DESC);

CREATE INDEX IF NOT EXISTS idx_memories_scraped_at ON memories(scraped_at DESC);

CREATE INDEX IF NOT EXISTS idx_memories_video_platform ON memories(video_platform) WHERE video_platform IS NOT NULL;

CREATE INDEX IF NOT EXISTS idx_memories_tags ON memories USING gin(to_tsvector('english', COALESCE(tags, '')));

CREATE INDEX IF NOT EXISTS idx_memories_content ON memories USING gin(to_tsvector('english', COALESCE(content, '')));

CREATE INDEX IF NOT EXISTS idx_memories_search ON memories USING gin(
	to_tsvector('english', COALESCE(title, '') || ' ' || COALESCE(content, '') || ' ' || COALESCE(selected_text, '') || ' ' || COALESCE(tags, ''))
);

CREATE INDEX IF NOT EXISTS idx_links_memory_id ON links(memory_id);

CREATE INDEX IF NOT EXISTS idx_scraped_data_user_id ON scraped_data(user_id);
";
