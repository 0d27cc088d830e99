mod texture;
