mod tests_render;
